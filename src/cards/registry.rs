//! In-memory card catalog.
//!
//! `CardRegistry` stores the catalog in category order and keeps an index
//! for O(1) lookup by `CardId`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::catalog::{CardCatalog, CatalogError};
use super::definition::{Card, CardCategory, CardId};

/// Where a card lives inside the registry.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Base(usize),
    Modifier(usize),
    Null,
}

/// Serialized catalog layout.
///
/// ```json
/// {
///   "base": [{"id": "b-1", "name": "Strike", "category": "Base"}],
///   "modifiers": [{"id": "m-1", "name": "Surge", "category": "Modifier", "cost": 3}],
///   "null": {"id": "null", "name": "Null", "category": "Null"}
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogData {
    pub base: Vec<Card>,
    #[serde(default)]
    pub modifiers: Vec<Card>,
    pub null: Card,
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deck_engine::cards::{Card, CardCatalog, CardCategory, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new(Card::new("null", "Null", CardCategory::Null));
/// registry.register(Card::new("b-1", "Strike", CardCategory::Base));
/// registry.register(Card::new("m-1", "Surge", CardCategory::Modifier).with_cost(3));
///
/// assert_eq!(registry.cost(&CardId::new("m-1")), 3);
/// assert_eq!(registry.base_cards().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CardRegistry {
    base: Vec<Card>,
    modifiers: Vec<Card>,
    null: Card,
    index: FxHashMap<CardId, Slot>,
}

impl CardRegistry {
    /// Create a registry holding only the null card.
    #[must_use]
    pub fn new(null: Card) -> Self {
        let mut index = FxHashMap::default();
        index.insert(null.id.clone(), Slot::Null);
        Self {
            base: Vec::new(),
            modifiers: Vec::new(),
            null,
            index,
        }
    }

    /// Register a card definition.
    ///
    /// Panics if the id already exists or the card is a second null card.
    pub fn register(&mut self, card: Card) {
        if let Err(e) = self.try_register(card) {
            panic!("{e}");
        }
    }

    /// Register a card definition, reporting conflicts instead of panicking.
    pub fn try_register(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.index.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }

        let slot = match card.category {
            CardCategory::Base => {
                self.base.push(card.clone());
                Slot::Base(self.base.len() - 1)
            }
            CardCategory::Modifier => {
                self.modifiers.push(card.clone());
                Slot::Modifier(self.modifiers.len() - 1)
            }
            CardCategory::Null => return Err(CatalogError::MisplacedNull(card.id)),
        };

        self.index.insert(card.id, slot);
        Ok(())
    }

    /// Build a registry from its serialized layout.
    ///
    /// Every card must sit in the list matching its category.
    pub fn from_data(data: CatalogData) -> Result<Self, CatalogError> {
        if data.null.category != CardCategory::Null {
            return Err(CatalogError::WrongCategory {
                id: data.null.id,
                expected: CardCategory::Null,
                found: data.null.category,
            });
        }

        let mut registry = Self::new(data.null);
        for (expected, cards) in [
            (CardCategory::Base, data.base),
            (CardCategory::Modifier, data.modifiers),
        ] {
            for card in cards {
                if card.category != expected {
                    return Err(CatalogError::WrongCategory {
                        id: card.id,
                        expected,
                        found: card.category,
                    });
                }
                registry.try_register(card)?;
            }
        }
        Ok(registry)
    }

    /// Parse a registry from JSON (see [`CatalogData`]).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Get the number of registered cards, including the null card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// A registry always holds its null card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl CardCatalog for CardRegistry {
    fn base_cards(&self) -> &[Card] {
        &self.base
    }

    fn modifier_cards(&self) -> &[Card] {
        &self.modifiers
    }

    fn null_card(&self) -> &Card {
        &self.null
    }

    fn get(&self, id: &CardId) -> Option<&Card> {
        match self.index.get(id)? {
            Slot::Base(i) => self.base.get(*i),
            Slot::Modifier(i) => self.modifiers.get(*i),
            Slot::Null => Some(&self.null),
        }
    }
}

//! Card definitions - static catalog data.
//!
//! A `Card` holds the immutable properties of one catalog entry: its
//! category, its capacity cost and its descriptive text. The engine only
//! ever stores `CardId`s; everything else is looked up through the catalog.

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog card.
///
/// Identity is the string id supplied by the catalog. The same id appears
/// once per physical copy in the deck, hand and discard piles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Card category.
///
/// - `Base`: skill cards; a legal deck holds an exact number of them.
/// - `Modifier`: optional cards whose cost counts against modifier capacity.
/// - `Null`: filler card with no cost; a legal deck holds a minimum number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Base,
    Modifier,
    Null,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deck_engine::cards::{Card, CardCategory};
///
/// let surge = Card::new("m-surge", "Surge", CardCategory::Modifier)
///     .with_cost(3)
///     .with_text("Doubles the base effect.")
///     .with_detail("Range", "Self");
///
/// assert_eq!(surge.cost, 3);
/// assert_eq!(surge.detail("Range"), Some("Self"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Category (base, modifier or null).
    pub category: CardCategory,

    /// Capacity cost. Only meaningful for modifiers; zero elsewhere.
    #[serde(default)]
    pub cost: u32,

    /// Rules text.
    #[serde(default)]
    pub text: String,

    /// Ordered label/value pairs shown with the card.
    #[serde(default)]
    pub details: Vec<(String, String)>,
}

impl Card {
    /// Create a new card with zero cost and no text.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, category: CardCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            cost: 0,
            text: String::new(),
            details: Vec::new(),
        }
    }

    /// Set the capacity cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append a detail pair (builder pattern).
    #[must_use]
    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((label.into(), value.into()));
        self
    }

    /// Look up a detail value by label.
    #[must_use]
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_base(&self) -> bool {
        self.category == CardCategory::Base
    }

    #[must_use]
    pub fn is_modifier(&self) -> bool {
        self.category == CardCategory::Modifier
    }
}

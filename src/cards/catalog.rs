//! Catalog interface consumed by the engine.
//!
//! The catalog is an immutable external data source keyed by card id. The
//! engine reads categories and costs through this trait and never mutates
//! it.

use thiserror::Error;

use super::definition::{Card, CardCategory, CardId};

/// Read-only card catalog.
///
/// Implementors supply the three category lists; lookup helpers have
/// default implementations built on top of them. Catalog order is
/// significant: it is the order used when expanding selection counts into
/// a deck.
pub trait CardCatalog {
    /// All base cards, in catalog order.
    fn base_cards(&self) -> &[Card];

    /// All modifier cards, in catalog order.
    fn modifier_cards(&self) -> &[Card];

    /// The single null card.
    fn null_card(&self) -> &Card;

    /// Iterate over every card: bases, then modifiers, then the null card.
    fn all_cards(&self) -> Box<dyn Iterator<Item = &Card> + '_> {
        Box::new(
            self.base_cards()
                .iter()
                .chain(self.modifier_cards())
                .chain(std::iter::once(self.null_card())),
        )
    }

    /// Look up a card by id.
    fn get(&self, id: &CardId) -> Option<&Card> {
        self.all_cards().find(|c| &c.id == id)
    }

    /// Category of a card, or `None` for unknown ids.
    fn category(&self, id: &CardId) -> Option<CardCategory> {
        self.get(id).map(|c| c.category)
    }

    /// Capacity cost of a card. Unknown ids cost 0.
    fn cost(&self, id: &CardId) -> u32 {
        self.get(id).map_or(0, |c| c.cost)
    }

    /// Check whether `id` is a base card.
    fn is_base(&self, id: &CardId) -> bool {
        self.category(id) == Some(CardCategory::Base)
    }

    /// Check whether `id` is a modifier card.
    fn is_modifier(&self, id: &CardId) -> bool {
        self.category(id) == Some(CardCategory::Modifier)
    }

    /// Check whether `id` is known to the catalog.
    fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card id {0} registered twice")]
    DuplicateId(CardId),

    #[error("null card {0} must be supplied as the catalog's null card")]
    MisplacedNull(CardId),

    #[error("catalog card {id} has category {found:?}, expected {expected:?}")]
    WrongCategory {
        id: CardId,
        expected: CardCategory,
        found: CardCategory,
    },

    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

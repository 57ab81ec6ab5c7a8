//! Builder state: the single aggregate the engine owns.
//!
//! ## BuilderState
//!
//! - Selection counts and modifier capacity (deck composition)
//! - Deck, hand and discard piles (runtime)
//! - Lock flag and hand limit
//! - Deck name and saved-deck snapshots
//!
//! Fields are read through accessors; only the engine mutates them.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::DeckRules;
use super::counts::SelectionCounts;
use crate::cards::CardId;
use crate::zones::Piles;

/// A named deck captured by `save`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDeck {
    /// Deck order at save time, bottom first.
    pub deck: Vector<CardId>,

    /// Selection counts at save time.
    pub counts: SelectionCounts,

    /// Modifier capacity at save time.
    pub capacity: u32,

    /// Unix timestamp (milliseconds) when the deck was saved.
    pub created_at: u64,
}

/// Complete builder state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderState {
    pub(crate) counts: SelectionCounts,
    pub(crate) capacity: u32,
    pub(crate) piles: Piles,
    pub(crate) locked: bool,
    pub(crate) hand_limit: usize,
    pub(crate) deck_name: String,
    pub(crate) saved_decks: BTreeMap<String, SavedDeck>,
}

impl BuilderState {
    /// Create a fresh state from the rule defaults.
    ///
    /// ## Defaults
    ///
    /// - No base or modifier cards, `min_nulls` null cards
    /// - `default_capacity` modifier capacity
    /// - Empty piles, unlocked
    /// - `default_hand_limit` hand limit
    /// - No name, no saved decks
    #[must_use]
    pub fn new(rules: &DeckRules) -> Self {
        Self {
            counts: SelectionCounts::with_nulls(rules.min_nulls),
            capacity: rules.default_capacity,
            piles: Piles::new(),
            locked: false,
            hand_limit: rules.default_hand_limit,
            deck_name: String::new(),
            saved_decks: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn counts(&self) -> &SelectionCounts {
        &self.counts
    }

    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn hand_limit(&self) -> usize {
        self.hand_limit
    }

    #[must_use]
    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    #[must_use]
    pub fn saved_decks(&self) -> &BTreeMap<String, SavedDeck> {
        &self.saved_decks
    }

    /// Free slots in hand. Zero when the hand is at or over the limit.
    #[must_use]
    pub fn hand_space(&self) -> usize {
        self.hand_limit.saturating_sub(self.piles.hand().len())
    }
}

/// Current unix time in milliseconds.
pub(crate) fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

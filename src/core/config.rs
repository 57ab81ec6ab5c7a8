//! Deck rules configuration.
//!
//! `DeckRules` carries the legality thresholds and the defaults used when
//! a fresh `BuilderState` is created. The engine never hardcodes these
//! numbers; callers can tighten or relax them at startup.

use serde::{Deserialize, Serialize};

/// Exact number of base cards a legal deck holds.
pub const BASE_TARGET: u32 = 26;

/// Minimum number of null cards a legal deck holds.
pub const MIN_NULLS: u32 = 5;

/// Default modifier capacity.
pub const DEFAULT_CAPACITY: u32 = 10;

/// Default hand limit.
pub const DEFAULT_HAND_LIMIT: usize = 5;

/// Largest modifier or null count a restored snapshot may carry.
pub const MAX_RESTORED_CARDS: u32 = 1000;

/// Deck legality thresholds and state defaults.
///
/// ## Example
///
/// ```
/// use deck_engine::core::DeckRules;
///
/// let rules = DeckRules::default().with_hand_limit(7);
/// assert_eq!(rules.base_target, 26);
/// assert_eq!(rules.default_hand_limit, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRules {
    /// Exact base-card total required for a valid deck.
    pub base_target: u32,

    /// Minimum null-card count. Also the floor for null adjustments.
    pub min_nulls: u32,

    /// Modifier capacity of a fresh state.
    pub default_capacity: u32,

    /// Hand limit of a fresh state.
    pub default_hand_limit: usize,

    /// Floor for hand-limit adjustments.
    pub min_hand_limit: usize,

    /// Ceiling on restored modifier totals and null counts. Larger values
    /// are treated as corrupt data.
    pub max_restored_cards: u32,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            base_target: BASE_TARGET,
            min_nulls: MIN_NULLS,
            default_capacity: DEFAULT_CAPACITY,
            default_hand_limit: DEFAULT_HAND_LIMIT,
            min_hand_limit: 1,
            max_restored_cards: MAX_RESTORED_CARDS,
        }
    }
}

impl DeckRules {
    /// Set the required base total.
    #[must_use]
    pub fn with_base_target(mut self, target: u32) -> Self {
        self.base_target = target;
        self
    }

    /// Set the null-card minimum.
    #[must_use]
    pub fn with_min_nulls(mut self, min: u32) -> Self {
        self.min_nulls = min;
        self
    }

    /// Set the starting modifier capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.default_capacity = capacity;
        self
    }

    /// Set the starting hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.default_hand_limit = limit;
        self
    }

    /// Parse rules from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

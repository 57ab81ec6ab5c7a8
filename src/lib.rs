//! # deck-engine
//!
//! Deck-state engine for a build-then-play card game.
//!
//! A player assembles a deck from a fixed catalog, checks it against the
//! composition rules, then plays through a draw / hand / discard loop in
//! which one base card is played together with attached modifiers.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `DeckEngine` owns the builder state and is the only
//!    thing that mutates it.
//!
//! 2. **Total transitions**: An illegal command is a no-op. Nothing in the
//!    engine returns an error; callers just re-render the unchanged state.
//!
//! 3. **Catalog as data**: Card categories and costs come from a read-only
//!    `CardCatalog`. Rules read thresholds from `DeckRules`.
//!
//! ## Modules
//!
//! - `core`: Rules config, RNG, selection counts, builder state
//! - `cards`: Card definitions, catalog trait, registry
//! - `rules`: Capacity calculation and deck validation
//! - `zones`: Deck, hand and discard piles
//! - `play`: Base + modifier play selection
//! - `engine`: `DeckEngine` and the `Command` API
//! - `persistence`: Snapshots, stores and lenient restore

pub mod core;
pub mod cards;
pub mod rules;
pub mod zones;
pub mod play;
pub mod engine;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{
    BuilderState, DeckRules, GameRng, GameRngState, SavedDeck, SelectionCounts,
};

pub use crate::cards::{Card, CardCatalog, CardCategory, CardId, CardRegistry, CatalogError};

pub use crate::rules::{DeckStatus, DeckViolation};

pub use crate::zones::{
    DiscardEntry, DiscardOrigin, HandEntry, HandStatus, PileScope, Piles, ReturnShuffle,
};

pub use crate::play::{ActivePlay, PlayState};

pub use crate::engine::{Command, DeckEngine, Transition};

pub use crate::persistence::{
    BincodeFileStore, JsonFileStore, MemoryStore, PersistenceError, Session, Snapshot,
    SnapshotStore,
};

//! Core engine types: configuration, RNG, selection counts, builder state.
//!
//! These are the building blocks the engine mutates. Callers read them
//! through accessors and change them only through `engine::DeckEngine`.

pub mod config;
pub mod counts;
pub mod rng;
pub mod state;

pub use config::{
    DeckRules, BASE_TARGET, DEFAULT_CAPACITY, DEFAULT_HAND_LIMIT, MAX_RESTORED_CARDS, MIN_NULLS,
};
pub use counts::SelectionCounts;
pub use rng::{GameRng, GameRngState};
pub use state::{BuilderState, SavedDeck};

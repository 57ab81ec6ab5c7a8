//! Card locations: the deck, the hand and the discard pile.
//!
//! ## Key Types
//!
//! - `Piles`: The three runtime sequences and the moves between them
//! - `HandEntry` / `HandStatus`: A card in hand and whether it is spent
//! - `DiscardEntry` / `DiscardOrigin`: A discarded card and how it got there
//! - `PileScope`: Move a single entry or a whole same-id group
//! - `ReturnShuffle`: Shuffle policy when discards go back to the deck

pub mod piles;

pub use piles::{
    DiscardEntry, DiscardOrigin, HandEntry, HandStatus, PileScope, Piles, ReturnShuffle,
};

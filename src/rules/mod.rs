//! Deck composition rules.
//!
//! - `capacity`: Modifier capacity usage and admission checks
//! - `validator`: Deck legality, canonical deck expansion, count edits

pub mod capacity;
pub mod validator;

pub use capacity::{can_admit, capacity_used, fits};
pub use validator::{
    adjust_base_count, adjust_capacity, adjust_mod_count, adjust_null_count, build_deck_array,
    validate, DeckStatus, DeckViolation,
};

//! Play selection: pair one base card with attached modifiers.
//!
//! A play moves through two states:
//!
//! - `Idle`: no play in progress
//! - `Selecting`: a base card is chosen; modifiers may be toggled on and off
//!
//! `finalize` commits the base and its modifiers to the discard pile tagged
//! `Played`; `cancel` drops the selection and leaves the hand untouched.
//!
//! The play state lives beside the builder state, not inside it, so every
//! transition re-checks hand membership before acting.
//!
//! ## Example
//!
//! ```
//! use deck_engine::play::PlayState;
//!
//! let play = PlayState::default();
//! assert!(play.is_idle());
//! assert!(play.active().is_none());
//! ```

mod selection;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardCatalog, CardId};

/// An in-progress play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePlay {
    /// The base card being played.
    pub base: CardId,

    /// Attached modifier ids, in attach order. Each id appears once.
    ///
    /// SmallVec keeps the common case of a few attachments off the heap.
    pub mods: SmallVec<[CardId; 4]>,
}

impl ActivePlay {
    /// Start a play with no modifiers attached.
    #[must_use]
    pub fn new(base: CardId) -> Self {
        Self {
            base,
            mods: SmallVec::new(),
        }
    }

    /// Check whether `id` is attached.
    #[must_use]
    pub fn has_mod(&self, id: &CardId) -> bool {
        self.mods.contains(id)
    }

    /// Summed catalog cost of the attached modifiers.
    #[must_use]
    pub fn attached_cost<C: CardCatalog + ?Sized>(&self, catalog: &C) -> u32 {
        self.mods
            .iter()
            .map(|id| catalog.cost(id))
            .fold(0u32, u32::saturating_add)
    }
}

/// Play selection state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    #[default]
    Idle,
    Selecting(ActivePlay),
}

impl PlayState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, PlayState::Idle)
    }

    /// The play in progress, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActivePlay> {
        match self {
            PlayState::Idle => None,
            PlayState::Selecting(play) => Some(play),
        }
    }
}

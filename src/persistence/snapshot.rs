//! Persisted snapshot shape.
//!
//! A `Snapshot` is the complete builder state in the layout the storage
//! side reads and writes, plus the shuffle stream position. The active play
//! is transient and never stored.

use std::collections::BTreeMap;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId};
use crate::core::counts::SelectionCounts;
use crate::core::rng::GameRngState;
use crate::core::state::{BuilderState, SavedDeck};
use crate::engine::DeckEngine;
use crate::zones::{DiscardEntry, HandEntry, Piles};

/// Full builder state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub base_counts: FxHashMap<CardId, u32>,
    pub mod_counts: FxHashMap<CardId, u32>,
    pub null_count: u32,
    pub modifier_capacity: u32,
    pub deck: Vector<CardId>,
    pub hand: Vector<HandEntry>,
    pub discard: Vector<DiscardEntry>,
    pub is_locked: bool,
    pub hand_limit: usize,
    pub deck_name: String,
    pub saved_decks: BTreeMap<String, SavedDeck>,
    /// Shuffle stream position. `None` for snapshots taken from a bare state.
    #[serde(default)]
    pub rng_state: Option<GameRngState>,
}

impl From<&BuilderState> for Snapshot {
    fn from(state: &BuilderState) -> Self {
        let piles = state.piles();
        Self {
            base_counts: state.counts.base.clone(),
            mod_counts: state.counts.modifiers.clone(),
            null_count: state.counts.nulls,
            modifier_capacity: state.capacity,
            deck: piles.deck().clone(),
            hand: piles.hand().clone(),
            discard: piles.discard().clone(),
            is_locked: state.locked,
            hand_limit: state.hand_limit,
            deck_name: state.deck_name.clone(),
            saved_decks: state.saved_decks.clone(),
            rng_state: None,
        }
    }
}

impl From<Snapshot> for BuilderState {
    /// Rebuild state without any validation; `rng_state` is ignored. Use
    /// [`restore_state`](super::restore_state) for untrusted input.
    fn from(snapshot: Snapshot) -> Self {
        BuilderState {
            counts: SelectionCounts {
                base: snapshot.base_counts,
                modifiers: snapshot.mod_counts,
                nulls: snapshot.null_count,
            },
            capacity: snapshot.modifier_capacity,
            piles: Piles::from_parts(snapshot.deck, snapshot.hand, snapshot.discard),
            locked: snapshot.is_locked,
            hand_limit: snapshot.hand_limit,
            deck_name: snapshot.deck_name,
            saved_decks: snapshot.saved_decks,
        }
    }
}

impl<C: CardCatalog> DeckEngine<C> {
    /// Capture the current state and RNG position for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rng_state: Some(self.rng().state()),
            ..Snapshot::from(self.state())
        }
    }
}

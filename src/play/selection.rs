//! Play selection transitions.
//!
//! Every transition is total: an illegal request leaves the state as it
//! was and reports `false` / `None`.

use super::{ActivePlay, PlayState};
use crate::cards::{CardCatalog, CardId};
use crate::core::counts::SelectionCounts;
use crate::rules::capacity::{capacity_used, fits};
use crate::zones::{DiscardOrigin, Piles};

impl PlayState {
    /// Choose a base card to play.
    ///
    /// Only from `Idle`, and only for a base card that is unspent in hand.
    pub fn start<C: CardCatalog + ?Sized>(
        &mut self,
        catalog: &C,
        piles: &Piles,
        base: &CardId,
    ) -> bool {
        if !self.is_idle() || !catalog.is_base(base) || !piles.has_unspent(base) {
            return false;
        }
        *self = PlayState::Selecting(ActivePlay::new(base.clone()));
        true
    }

    /// Attach or detach a modifier.
    ///
    /// Detaching always succeeds. Attaching needs a modifier that is unspent
    /// in hand and whose cost fits under `capacity` on top of the deck's
    /// modifier usage plus everything already attached.
    pub fn toggle_attach<C: CardCatalog + ?Sized>(
        &mut self,
        catalog: &C,
        piles: &Piles,
        counts: &SelectionCounts,
        capacity: u32,
        id: &CardId,
    ) -> bool {
        let PlayState::Selecting(play) = self else {
            return false;
        };

        if let Some(pos) = play.mods.iter().position(|m| m == id) {
            play.mods.remove(pos);
            return true;
        }

        if !catalog.is_modifier(id) || !piles.has_unspent(id) {
            return false;
        }
        let used = capacity_used(catalog, &counts.modifiers)
            .saturating_add(play.attached_cost(catalog));
        if !fits(used, catalog.cost(id), capacity) {
            return false;
        }

        play.mods.push(id.clone());
        true
    }

    /// Commit the play: move the base and its modifiers to the discard pile.
    ///
    /// Refused when idle or when the base is no longer unspent in hand.
    /// Attached modifiers that have left the hand since they were attached
    /// are dropped from the committed play. Returns what was committed.
    pub fn finalize(&mut self, piles: &mut Piles) -> Option<ActivePlay> {
        let PlayState::Selecting(play) = self else {
            return None;
        };
        if !piles.has_unspent(&play.base) {
            return None;
        }

        let PlayState::Selecting(mut play) = std::mem::take(self) else {
            return None;
        };
        piles.commit_unspent(&play.base, DiscardOrigin::Played);
        play.mods
            .retain(|id| piles.commit_unspent(id, DiscardOrigin::Played));
        Some(play)
    }

    /// Abandon the play. The hand is untouched.
    pub fn cancel(&mut self) -> Option<ActivePlay> {
        match std::mem::take(self) {
            PlayState::Idle => None,
            PlayState::Selecting(play) => Some(play),
        }
    }
}

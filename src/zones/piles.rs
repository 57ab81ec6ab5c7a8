//! Deck, hand and discard piles.
//!
//! `Piles` owns the three runtime sequences and performs the card movements
//! between them. It knows nothing about locking or the catalog; the engine
//! checks those preconditions before calling in.
//!
//! Ordering:
//! - Deck: index 0 is bottom, last index is top. Draws pop the top.
//! - Hand: insertion (draw) order.
//! - Discard: append-only in discard order; group moves walk it from the
//!   most recent entry backward.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::rng::GameRng;

/// Whether a hand card has been used this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandStatus {
    #[default]
    Unspent,
    Played,
}

/// A card in hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandEntry {
    pub id: CardId,
    #[serde(default)]
    pub status: HandStatus,
}

impl HandEntry {
    #[must_use]
    pub fn unspent(id: CardId) -> Self {
        Self {
            id,
            status: HandStatus::Unspent,
        }
    }

    #[must_use]
    pub fn is_unspent(&self) -> bool {
        self.status == HandStatus::Unspent
    }
}

/// How a card reached the discard pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscardOrigin {
    /// Committed by a finalized play.
    Played,
    /// Discarded directly from hand.
    #[default]
    Discarded,
}

/// A card in the discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscardEntry {
    pub id: CardId,
    #[serde(default)]
    pub origin: DiscardOrigin,
}

/// How many entries of an id a move affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileScope {
    /// The single most recent matching entry.
    One,
    /// Every matching entry.
    All,
}

/// Optional shuffle after returning discards to the deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnShuffle {
    /// Returned cards sit on top in return order.
    #[default]
    None,
    /// Shuffle only the returned cards among themselves.
    Returned,
    /// Shuffle the whole deck afterwards.
    Deck,
}

/// The deck/hand/discard sequences.
///
/// Uses `im::Vector` so snapshots of the piles clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    deck: Vector<CardId>,
    hand: Vector<HandEntry>,
    discard: Vector<DiscardEntry>,
}

impl Piles {
    /// Create empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild piles from restored sequences.
    #[must_use]
    pub fn from_parts(
        deck: Vector<CardId>,
        hand: Vector<HandEntry>,
        discard: Vector<DiscardEntry>,
    ) -> Self {
        Self {
            deck,
            hand,
            discard,
        }
    }

    // === Queries ===

    /// Deck cards, bottom first.
    #[must_use]
    pub fn deck(&self) -> &Vector<CardId> {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<HandEntry> {
        &self.hand
    }

    #[must_use]
    pub fn discard(&self) -> &Vector<DiscardEntry> {
        &self.discard
    }

    /// Top card of the deck (next to be drawn).
    #[must_use]
    pub fn top_card(&self) -> Option<&CardId> {
        self.deck.last()
    }

    /// Check whether `id` is in hand and unspent.
    #[must_use]
    pub fn has_unspent(&self, id: &CardId) -> bool {
        self.hand.iter().any(|e| &e.id == id && e.is_unspent())
    }

    /// Number of hand entries with `id`.
    #[must_use]
    pub fn hand_count(&self, id: &CardId) -> usize {
        self.hand.iter().filter(|e| &e.id == id).count()
    }

    /// Number of discard entries with `id`.
    #[must_use]
    pub fn discard_count(&self, id: &CardId) -> usize {
        self.discard.iter().filter(|e| &e.id == id).count()
    }

    /// Every card id across all three piles.
    pub fn all_ids(&self) -> impl Iterator<Item = &CardId> {
        self.deck
            .iter()
            .chain(self.hand.iter().map(|e| &e.id))
            .chain(self.discard.iter().map(|e| &e.id))
    }

    /// Total cards across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    // === Deck ===

    /// Replace the deck. Hand and discard are untouched.
    pub fn set_deck(&mut self, deck: Vector<CardId>) {
        self.deck = deck;
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle_vector(&mut self.deck);
    }

    /// Empty the hand and the discard pile.
    pub fn clear_hand_and_discard(&mut self) {
        self.hand.clear();
        self.discard.clear();
    }

    /// Shuffle every discard id and put them on top of the deck.
    ///
    /// Returns the number of cards recycled.
    pub fn recycle_discard(&mut self, rng: &mut GameRng) -> usize {
        let start = self.deck.len();
        let moved = self.discard.len();
        for entry in std::mem::take(&mut self.discard) {
            self.deck.push_back(entry.id);
        }
        rng.shuffle_vector_from(&mut self.deck, start);
        moved
    }

    /// Draw the top card into hand.
    ///
    /// Refuses when the hand is at `hand_limit`. An empty deck is refilled
    /// from the discard pile first; if both are empty nothing is drawn.
    pub fn draw(&mut self, hand_limit: usize, rng: &mut GameRng) -> Option<CardId> {
        if self.hand.len() >= hand_limit {
            return None;
        }
        if self.deck.is_empty() {
            self.recycle_discard(rng);
        }
        let id = self.deck.pop_back()?;
        self.hand.push_back(HandEntry::unspent(id.clone()));
        Some(id)
    }

    // === Hand ===

    /// Move hand entries with `id` to the discard pile.
    ///
    /// `One` moves the most recently drawn matching entry. Returns the
    /// number of cards moved.
    pub fn discard_from_hand(
        &mut self,
        id: &CardId,
        scope: PileScope,
        origin: DiscardOrigin,
    ) -> usize {
        let mut moved = 0;
        match scope {
            PileScope::One => {
                if let Some(idx) = self.hand.iter().rposition(|e| &e.id == id) {
                    self.hand.remove(idx);
                    moved = 1;
                }
            }
            PileScope::All => {
                let before = self.hand.len();
                self.hand.retain(|e| &e.id != id);
                moved = before - self.hand.len();
            }
        }
        for _ in 0..moved {
            self.discard.push_back(DiscardEntry {
                id: id.clone(),
                origin,
            });
        }
        moved
    }

    /// Move one unspent hand entry with `id` to the discard pile.
    ///
    /// Returns false if no unspent entry exists.
    pub fn commit_unspent(&mut self, id: &CardId, origin: DiscardOrigin) -> bool {
        match self
            .hand
            .iter()
            .rposition(|e| &e.id == id && e.is_unspent())
        {
            Some(idx) => {
                let entry = self.hand.remove(idx);
                self.discard.push_back(DiscardEntry {
                    id: entry.id,
                    origin,
                });
                true
            }
            None => false,
        }
    }

    /// Flip the status of one hand entry with `id`.
    ///
    /// An unspent entry is marked played; if none is unspent, a played entry
    /// is marked unspent again. Returns the new status.
    pub fn toggle_played(&mut self, id: &CardId) -> Option<HandStatus> {
        let idx = self
            .hand
            .iter()
            .position(|e| &e.id == id && e.is_unspent())
            .or_else(|| self.hand.iter().position(|e| &e.id == id))?;

        let entry = &mut self.hand[idx];
        entry.status = match entry.status {
            HandStatus::Unspent => HandStatus::Played,
            HandStatus::Played => HandStatus::Unspent,
        };
        Some(entry.status)
    }

    // === Discard ===

    /// Take discard entries with `id`, most recent first, at most `limit`.
    fn take_from_discard(&mut self, id: &CardId, scope: PileScope, limit: usize) -> Vec<CardId> {
        let wanted = match scope {
            PileScope::One => 1,
            PileScope::All => usize::MAX,
        }
        .min(limit);

        let mut taken = Vec::new();
        let mut idx = self.discard.len();
        while idx > 0 && taken.len() < wanted {
            idx -= 1;
            if &self.discard[idx].id == id {
                taken.push(self.discard.remove(idx).id);
            }
        }
        taken
    }

    /// Return discard entries with `id` to the top of the deck.
    ///
    /// Cards are pushed in most-recent-first order, then optionally
    /// shuffled. Returns the number of cards moved.
    pub fn return_to_deck(
        &mut self,
        id: &CardId,
        scope: PileScope,
        shuffle: ReturnShuffle,
        rng: &mut GameRng,
    ) -> usize {
        let start = self.deck.len();
        let taken = self.take_from_discard(id, scope, usize::MAX);
        let moved = taken.len();
        if moved == 0 {
            return 0;
        }

        self.deck.extend(taken);
        match shuffle {
            ReturnShuffle::None => {}
            ReturnShuffle::Returned => rng.shuffle_vector_from(&mut self.deck, start),
            ReturnShuffle::Deck => rng.shuffle_vector(&mut self.deck),
        }
        moved
    }

    /// Return discard entries with `id` to hand as unspent.
    ///
    /// Bounded by the free hand space (`hand_limit - |hand|`); entries that
    /// do not fit stay in the discard pile. Most recent discards move first.
    pub fn return_to_hand(&mut self, id: &CardId, scope: PileScope, hand_limit: usize) -> usize {
        let space = hand_limit.saturating_sub(self.hand.len());
        if space == 0 {
            return 0;
        }

        let taken = self.take_from_discard(id, scope, space);
        let moved = taken.len();
        self.hand.extend(taken.into_iter().map(HandEntry::unspent));
        moved
    }
}

//! The deck engine: sole owner and mutator of the builder state.
//!
//! `DeckEngine` combines the catalog, the deck rules, the builder state, the
//! play selection and the RNG. Every user action is a method (or a
//! [`Command`] passed to [`DeckEngine::apply`]) that either applies
//! completely or leaves everything unchanged.
//!
//! ## Example
//!
//! ```
//! use deck_engine::cards::{Card, CardCategory, CardId, CardRegistry};
//! use deck_engine::core::DeckRules;
//! use deck_engine::engine::{Command, DeckEngine};
//!
//! let mut catalog = CardRegistry::new(Card::new("null", "Null", CardCategory::Null));
//! catalog.register(Card::new("b-1", "Strike", CardCategory::Base));
//!
//! let mut engine = DeckEngine::new(catalog, DeckRules::default(), 42);
//! engine.adjust_base_count(&CardId::new("b-1"), 26);
//! assert!(engine.is_valid());
//!
//! engine.apply(Command::GenerateDeck { shuffle: true });
//! engine.apply(Command::SetLocked(true));
//! assert!(engine.apply(Command::Draw).is_applied());
//! assert_eq!(engine.state().piles().hand().len(), 1);
//! ```

mod command;

pub use command::{Command, Transition};

use tracing::debug;

use crate::cards::{CardCatalog, CardId, CardRegistry};
use crate::core::config::DeckRules;
use crate::core::rng::GameRng;
use crate::core::state::{current_timestamp, BuilderState, SavedDeck};
use crate::play::{ActivePlay, PlayState};
use crate::rules::{self, DeckStatus};
use crate::zones::{DiscardOrigin, HandStatus, PileScope, ReturnShuffle};

/// Deck-state engine.
#[derive(Clone, Debug)]
pub struct DeckEngine<C: CardCatalog = CardRegistry> {
    catalog: C,
    rules: DeckRules,
    state: BuilderState,
    play: PlayState,
    rng: GameRng,
}

impl<C: CardCatalog> DeckEngine<C> {
    /// Create an engine with a default state.
    #[must_use]
    pub fn new(catalog: C, rules: DeckRules, seed: u64) -> Self {
        let state = BuilderState::new(&rules);
        Self::from_state(catalog, rules, state, GameRng::new(seed))
    }

    /// Create an engine around an existing state.
    #[must_use]
    pub fn from_state(catalog: C, rules: DeckRules, state: BuilderState, rng: GameRng) -> Self {
        Self {
            catalog,
            rules,
            state,
            play: PlayState::Idle,
            rng,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    #[must_use]
    pub fn play(&self) -> &PlayState {
        &self.play
    }

    /// The RNG behind every shuffle.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Current deck legality report.
    #[must_use]
    pub fn status(&self) -> DeckStatus {
        rules::validate(&self.catalog, &self.rules, &self.state.counts, self.state.capacity)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status().is_valid()
    }

    /// Modifier capacity consumed by the selection counts.
    #[must_use]
    pub fn capacity_used(&self) -> u32 {
        rules::capacity_used(&self.catalog, &self.state.counts.modifiers)
    }

    /// Check whether one more copy of `id` fits under the capacity.
    #[must_use]
    pub fn can_admit(&self, id: &CardId) -> bool {
        rules::can_admit(
            &self.catalog,
            &self.state.counts.modifiers,
            self.state.capacity,
            id,
        )
    }

    /// The canonical unshuffled deck for the current counts.
    #[must_use]
    pub fn build_deck_array(&self) -> im::Vector<CardId> {
        rules::build_deck_array(&self.catalog, &self.state.counts)
    }

    // === Command dispatch ===

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> Transition {
        let applied = match &command {
            Command::AdjustBaseCount { id, delta } => self.adjust_base_count(id, *delta),
            Command::AdjustModCount { id, delta } => self.adjust_mod_count(id, *delta),
            Command::AdjustNullCount { delta } => self.adjust_null_count(*delta),
            Command::AdjustCapacity { delta } => self.adjust_capacity(*delta),
            Command::AdjustHandLimit { delta } => self.adjust_hand_limit(*delta),
            Command::GenerateDeck { shuffle } => self.generate_deck(*shuffle),
            Command::Shuffle => self.shuffle_deck(),
            Command::Draw => self.draw().is_some(),
            Command::Reset => self.reset(),
            Command::Discard { id, scope } => self.discard_from_hand(id, *scope) > 0,
            Command::TogglePlayed { id } => self.toggle_played(id).is_some(),
            Command::ReturnToDeck { id, scope, shuffle } => {
                self.return_to_deck(id, *scope, *shuffle) > 0
            }
            Command::ReturnToHand { id, scope } => self.return_to_hand(id, *scope) > 0,
            Command::RecycleDiscard => self.recycle_discard() > 0,
            Command::SetLocked(locked) => self.set_locked(*locked),
            Command::ToggleLock => {
                self.set_locked(!self.state.locked);
                true
            }
            Command::StartPlay { id } => self.start_play(id),
            Command::ToggleAttach { id } => self.toggle_attach(id),
            Command::FinalizePlay => self.finalize_play().is_some(),
            Command::CancelPlay => self.cancel_play().is_some(),
            Command::SetDeckName { name } => self.set_deck_name(name),
            Command::SaveDeck { name } => self.save_deck(name),
            Command::LoadDeck { name } => self.load_deck(name),
            Command::DeleteDeck { name } => self.delete_deck(name),
        };

        let transition = Transition::from(applied);
        debug!(?command, ?transition, "command");
        transition
    }

    // === Deck composition ===

    /// Change a base card count. Not gated by the lock.
    pub fn adjust_base_count(&mut self, id: &CardId, delta: i32) -> bool {
        rules::adjust_base_count(&self.catalog, &self.rules, &mut self.state.counts, id, delta)
    }

    /// Change a modifier count. Refused while locked.
    pub fn adjust_mod_count(&mut self, id: &CardId, delta: i32) -> bool {
        if self.state.locked {
            return false;
        }
        rules::adjust_mod_count(
            &self.catalog,
            &mut self.state.counts,
            self.state.capacity,
            id,
            delta,
        )
    }

    /// Change the null count, floored at `min_nulls`. Refused while locked.
    pub fn adjust_null_count(&mut self, delta: i32) -> bool {
        if self.state.locked {
            return false;
        }
        rules::adjust_null_count(&self.rules, &mut self.state.counts, delta)
    }

    /// Change the modifier capacity, floored at 0.
    pub fn adjust_capacity(&mut self, delta: i32) -> bool {
        rules::adjust_capacity(&mut self.state.capacity, delta)
    }

    /// Change the hand limit, floored at `min_hand_limit`.
    ///
    /// Lowering the limit never removes cards already in hand.
    pub fn adjust_hand_limit(&mut self, delta: i32) -> bool {
        let Ok(delta) = isize::try_from(delta) else {
            return false;
        };
        let next = self
            .state
            .hand_limit
            .saturating_add_signed(delta)
            .max(self.rules.min_hand_limit);
        if next == self.state.hand_limit {
            return false;
        }
        self.state.hand_limit = next;
        true
    }

    // === Deck / hand / discard ===

    /// Replace the deck with the expansion of the current counts.
    ///
    /// Hand and discard are left alone.
    pub fn generate_deck(&mut self, shuffle: bool) -> bool {
        let deck = self.build_deck_array();
        self.state.piles.set_deck(deck);
        if shuffle {
            self.state.piles.shuffle_deck(&mut self.rng);
        }
        debug!(size = self.state.piles.deck().len(), shuffle, "deck generated");
        true
    }

    /// Shuffle the deck. Refused when there is nothing to reorder.
    pub fn shuffle_deck(&mut self) -> bool {
        if self.state.piles.deck().len() < 2 {
            return false;
        }
        self.state.piles.shuffle_deck(&mut self.rng);
        true
    }

    /// Draw the top card into hand.
    ///
    /// Refused when unlocked or the hand is full. An empty deck is refilled
    /// by shuffling the discard pile into it.
    pub fn draw(&mut self) -> Option<CardId> {
        if !self.state.locked || self.state.hand_space() == 0 {
            return None;
        }
        if self.state.piles.deck().is_empty() && !self.state.piles.discard().is_empty() {
            debug!(
                cards = self.state.piles.discard().len(),
                "deck empty, reshuffling discard"
            );
        }
        self.state.piles.draw(self.state.hand_limit, &mut self.rng)
    }

    /// Hard reset: rebuild and shuffle the deck, empty hand and discard.
    pub fn reset(&mut self) -> bool {
        self.play.cancel();
        self.state.piles.clear_hand_and_discard();
        self.generate_deck(true)
    }

    /// Discard hand entries with `id`. Returns the number moved.
    pub fn discard_from_hand(&mut self, id: &CardId, scope: PileScope) -> usize {
        self.state
            .piles
            .discard_from_hand(id, scope, DiscardOrigin::Discarded)
    }

    /// Flip one hand entry of `id` between unspent and played.
    pub fn toggle_played(&mut self, id: &CardId) -> Option<HandStatus> {
        self.state.piles.toggle_played(id)
    }

    /// Return discard entries with `id` to the top of the deck.
    pub fn return_to_deck(&mut self, id: &CardId, scope: PileScope, shuffle: ReturnShuffle) -> usize {
        self.state
            .piles
            .return_to_deck(id, scope, shuffle, &mut self.rng)
    }

    /// Return discard entries with `id` to hand, bounded by free hand space.
    pub fn return_to_hand(&mut self, id: &CardId, scope: PileScope) -> usize {
        self.state
            .piles
            .return_to_hand(id, scope, self.state.hand_limit)
    }

    /// Shuffle the whole discard pile back onto the deck.
    pub fn recycle_discard(&mut self) -> usize {
        self.state.piles.recycle_discard(&mut self.rng)
    }

    /// Set the lock flag. Refused when it already has that value.
    pub fn set_locked(&mut self, locked: bool) -> bool {
        if self.state.locked == locked {
            return false;
        }
        self.state.locked = locked;
        true
    }

    // === Play selection ===

    /// Begin a play with a base card from hand.
    pub fn start_play(&mut self, id: &CardId) -> bool {
        self.play.start(&self.catalog, &self.state.piles, id)
    }

    /// Attach or detach a modifier on the current play.
    pub fn toggle_attach(&mut self, id: &CardId) -> bool {
        self.play.toggle_attach(
            &self.catalog,
            &self.state.piles,
            &self.state.counts,
            self.state.capacity,
            id,
        )
    }

    /// Commit the current play to the discard pile.
    pub fn finalize_play(&mut self) -> Option<ActivePlay> {
        let committed = self.play.finalize(&mut self.state.piles)?;
        debug!(base = %committed.base, mods = committed.mods.len(), "play finalized");
        Some(committed)
    }

    /// Drop the current play without touching the hand.
    pub fn cancel_play(&mut self) -> Option<ActivePlay> {
        self.play.cancel()
    }

    // === Saved decks ===

    /// Rename the current deck. Refused for blank names.
    pub fn set_deck_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == self.state.deck_name {
            return false;
        }
        self.state.deck_name = name.to_string();
        true
    }

    /// Save deck, counts and capacity under `name`, overwriting any entry.
    pub fn save_deck(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let saved = SavedDeck {
            deck: self.state.piles.deck().clone(),
            counts: self.state.counts.clone(),
            capacity: self.state.capacity,
            created_at: current_timestamp(),
        };
        self.state.saved_decks.insert(name.to_string(), saved);
        self.state.deck_name = name.to_string();
        debug!(name, "deck saved");
        true
    }

    /// Load a saved deck.
    ///
    /// Replaces deck, counts and capacity; clears hand and discard; unlocks.
    pub fn load_deck(&mut self, name: &str) -> bool {
        let Some(saved) = self.state.saved_decks.get(name.trim()).cloned() else {
            return false;
        };
        self.play.cancel();
        self.state.piles.set_deck(saved.deck);
        self.state.piles.clear_hand_and_discard();
        self.state.counts = saved.counts;
        self.state.capacity = saved.capacity;
        self.state.locked = false;
        self.state.deck_name = name.trim().to_string();
        debug!(name, "deck loaded");
        true
    }

    /// Remove a saved deck.
    pub fn delete_deck(&mut self, name: &str) -> bool {
        self.state.saved_decks.remove(name.trim()).is_some()
    }
}

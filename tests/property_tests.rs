//! Property tests over random command sequences.

use std::collections::BTreeMap;

use deck_engine::cards::{Card, CardCategory, CardId, CardRegistry};
use deck_engine::core::{DeckRules, GameRng};
use deck_engine::engine::{Command, DeckEngine};
use deck_engine::zones::{PileScope, ReturnShuffle};
use im::Vector;
use proptest::prelude::*;

const IDS: [&str; 5] = ["b1", "b2", "m1", "m2", "null"];

fn catalog() -> CardRegistry {
    let mut registry = CardRegistry::new(Card::new("null", "Null", CardCategory::Null));
    registry.register(Card::new("b1", "Strike", CardCategory::Base));
    registry.register(Card::new("b2", "Guard", CardCategory::Base));
    registry.register(Card::new("m1", "Surge", CardCategory::Modifier).with_cost(3));
    registry.register(Card::new("m2", "Echo", CardCategory::Modifier).with_cost(4));
    registry
}

/// Locked, freshly reset engine with a 33-card deck.
fn running_engine(seed: u64) -> DeckEngine {
    let mut engine = DeckEngine::new(catalog(), DeckRules::default(), seed);
    engine.adjust_base_count(&CardId::new("b1"), 16);
    engine.adjust_base_count(&CardId::new("b2"), 10);
    engine.adjust_mod_count(&CardId::new("m1"), 1);
    engine.adjust_mod_count(&CardId::new("m2"), 1);
    engine.reset();
    engine.set_locked(true);
    engine
}

fn multiset<'a>(ids: impl Iterator<Item = &'a CardId>) -> BTreeMap<CardId, usize> {
    let mut counts = BTreeMap::new();
    for id in ids {
        *counts.entry(id.clone()).or_insert(0) += 1;
    }
    counts
}

fn card_id() -> impl Strategy<Value = CardId> {
    prop::sample::select(IDS.to_vec()).prop_map(|s| CardId::new(s))
}

fn scope() -> impl Strategy<Value = PileScope> {
    prop_oneof![Just(PileScope::One), Just(PileScope::All)]
}

fn return_shuffle() -> impl Strategy<Value = ReturnShuffle> {
    prop_oneof![
        Just(ReturnShuffle::None),
        Just(ReturnShuffle::Returned),
        Just(ReturnShuffle::Deck),
    ]
}

/// Commands that move cards between piles without rebuilding the deck.
fn pile_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::Draw),
        1 => Just(Command::Shuffle),
        1 => Just(Command::RecycleDiscard),
        1 => (card_id(), scope()).prop_map(|(id, scope)| Command::Discard { id, scope }),
        1 => card_id().prop_map(|id| Command::TogglePlayed { id }),
        1 => (card_id(), scope(), return_shuffle())
            .prop_map(|(id, scope, shuffle)| Command::ReturnToDeck { id, scope, shuffle }),
        1 => (card_id(), scope()).prop_map(|(id, scope)| Command::ReturnToHand { id, scope }),
        1 => card_id().prop_map(|id| Command::StartPlay { id }),
        1 => card_id().prop_map(|id| Command::ToggleAttach { id }),
        1 => Just(Command::FinalizePlay),
        1 => Just(Command::CancelPlay),
        1 => (-2i32..=2).prop_map(|delta| Command::AdjustHandLimit { delta }),
    ]
}

proptest! {
    /// Pile commands only move cards; the multiset across piles is fixed.
    #[test]
    fn prop_pile_commands_conserve_cards(
        seed in any::<u64>(),
        commands in prop::collection::vec(pile_command(), 0..80),
    ) {
        let mut engine = running_engine(seed);
        let before = multiset(engine.state().piles().all_ids());

        for command in commands {
            engine.apply(command);
            let after = multiset(engine.state().piles().all_ids());
            prop_assert_eq!(&before, &after);
        }
    }

    /// Draws and returns never push the hand past its limit.
    #[test]
    fn prop_hand_within_limit(
        seed in any::<u64>(),
        commands in prop::collection::vec(pile_command(), 0..80),
    ) {
        let mut engine = running_engine(seed);

        for command in commands {
            let lowers_limit = matches!(command, Command::AdjustHandLimit { delta } if delta < 0);
            let hand_before = engine.state().piles().hand().len();
            engine.apply(command);
            let state = engine.state();
            if lowers_limit {
                prop_assert_eq!(state.piles().hand().len(), hand_before);
            } else {
                prop_assert!(
                    state.piles().hand().len() <= state.hand_limit().max(hand_before)
                );
            }
        }
    }

    /// Shuffling is a permutation.
    #[test]
    fn prop_shuffle_is_permutation(
        seed in any::<u64>(),
        items in prop::collection::vec(0u32..20, 0..60),
        start in 0usize..60,
    ) {
        let mut rng = GameRng::new(seed);
        let original: Vector<u32> = items.iter().copied().collect();

        let mut whole = original.clone();
        rng.shuffle_vector(&mut whole);
        let mut sorted_whole: Vec<u32> = whole.iter().copied().collect();
        sorted_whole.sort_unstable();
        let mut sorted_items = items.clone();
        sorted_items.sort_unstable();
        prop_assert_eq!(&sorted_whole, &sorted_items);

        let mut tail = original.clone();
        rng.shuffle_vector_from(&mut tail, start);
        let split = start.min(items.len());
        for i in 0..split {
            prop_assert_eq!(tail[i], original[i]);
        }
        let mut sorted_tail: Vec<u32> = tail.iter().skip(split).copied().collect();
        sorted_tail.sort_unstable();
        let mut expected_tail: Vec<u32> = items[split..].to_vec();
        expected_tail.sort_unstable();
        prop_assert_eq!(sorted_tail, expected_tail);
    }

    /// With an empty deck and a non-empty discard, a draw that has hand
    /// space always succeeds, and the discard is exactly what refills the
    /// deck.
    #[test]
    fn prop_draw_refills_from_discard(seed in any::<u64>(), keep in 0usize..5) {
        let mut engine = running_engine(seed);
        engine.adjust_hand_limit(40);
        while engine.draw().is_some() {}
        prop_assert!(engine.state().piles().deck().is_empty());

        let hand: Vec<CardId> = engine
            .state()
            .piles()
            .hand()
            .iter()
            .skip(keep)
            .map(|e| e.id.clone())
            .collect();
        for id in &hand {
            engine.discard_from_hand(id, PileScope::One);
        }

        let discarded = multiset(engine.state().piles().discard().iter().map(|e| &e.id));
        prop_assert!(!discarded.is_empty());
        let drawn = engine.draw();
        prop_assert!(drawn.is_some());
        prop_assert!(engine.state().piles().discard().is_empty());

        let refilled = multiset(engine.state().piles().deck().iter().chain(drawn.iter()));
        prop_assert_eq!(refilled, discarded);
    }

    /// Any sequence of modifier edits stays within capacity.
    #[test]
    fn prop_capacity_never_exceeded(
        edits in prop::collection::vec((prop::bool::ANY, -2i32..=3, 0i32..=3), 0..60),
    ) {
        let mut engine = DeckEngine::new(catalog(), DeckRules::default(), 0);

        for (first, delta, capacity_delta) in edits {
            let id = CardId::new(if first { "m1" } else { "m2" });
            let before = engine.capacity_used();
            let admitted = engine.can_admit(&id);
            let applied = engine.adjust_mod_count(&id, delta);

            if delta > 0 && applied {
                prop_assert!(admitted);
            }
            if delta > 0 {
                prop_assert!(engine.capacity_used() >= before);
            }
            prop_assert!(engine.capacity_used() <= engine.state().capacity());

            engine.adjust_capacity(capacity_delta);
        }
    }

    /// Base totals never exceed the target through adjustments.
    #[test]
    fn prop_base_total_bounded(
        edits in prop::collection::vec((prop::bool::ANY, -5i32..=8), 0..60),
    ) {
        let mut engine = DeckEngine::new(catalog(), DeckRules::default(), 0);
        for (first, delta) in edits {
            let id = CardId::new(if first { "b1" } else { "b2" });
            engine.adjust_base_count(&id, delta);
            prop_assert!(engine.state().counts().base_total() <= 26);
        }
    }
}

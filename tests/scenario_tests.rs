//! End-to-end scenarios for deck building and play.
//!
//! These tests drive the engine the way a UI would: adjust counts, build a
//! deck, lock it, draw, and resolve plays.

use deck_engine::cards::{Card, CardCategory, CardId, CardRegistry};
use deck_engine::core::DeckRules;
use deck_engine::engine::{Command, DeckEngine, Transition};
use deck_engine::play::PlayState;
use deck_engine::rules::DeckViolation;
use deck_engine::zones::{DiscardOrigin, PileScope};

fn catalog() -> CardRegistry {
    let mut registry = CardRegistry::new(Card::new("null", "Null", CardCategory::Null));
    for i in 1..=8 {
        registry.register(Card::new(format!("b{i}"), format!("Base {i}"), CardCategory::Base));
    }
    registry.register(Card::new("m1", "Surge", CardCategory::Modifier).with_cost(3));
    registry.register(Card::new("m2", "Echo", CardCategory::Modifier).with_cost(4));
    registry.register(Card::new("m3", "Pierce", CardCategory::Modifier).with_cost(5));
    registry
}

fn id(s: &str) -> CardId {
    CardId::new(s)
}

/// 26 bases spread over the catalog, default nulls.
fn legal_engine(seed: u64) -> DeckEngine {
    let mut engine = DeckEngine::new(catalog(), DeckRules::default(), seed);
    for (i, n) in [4, 4, 4, 4, 3, 3, 2, 2].iter().enumerate() {
        assert!(engine.adjust_base_count(&id(&format!("b{}", i + 1)), *n));
    }
    engine
}

/// Scenario A: 26 bases, 5 nulls, no modifiers, capacity 10 is valid.
#[test]
fn test_scenario_a_valid_deck() {
    let engine = legal_engine(1);

    let status = engine.status();
    assert_eq!(status.base_total, 26);
    assert_eq!(status.null_count, 5);
    assert_eq!(status.capacity, 10);
    assert!(engine.is_valid());
}

/// Scenario B: one null short is invalid.
#[test]
fn test_scenario_b_too_few_nulls() {
    let engine = legal_engine(1);

    // The null adjustment floors at 5, so build the state through a
    // snapshot the way a restore would.
    let mut snapshot = engine.snapshot();
    snapshot.null_count = 4;
    let state = snapshot.into();
    let engine = DeckEngine::from_state(catalog(), DeckRules::default(), state, deck_engine::GameRng::new(1));

    let status = engine.status();
    assert!(!status.is_valid());
    assert_eq!(
        status.violations,
        vec![DeckViolation::TooFewNulls { min: 5, actual: 4 }]
    );
}

/// Scenario C: unshuffled 31-card deck, five draws, sixth refused.
#[test]
fn test_scenario_c_draw_to_limit() {
    let mut engine = legal_engine(1);
    engine.generate_deck(false);
    let build_order = engine.build_deck_array();
    assert_eq!(build_order.len(), 31);
    engine.set_locked(true);

    for _ in 0..5 {
        assert!(engine.draw().is_some());
    }

    let piles = engine.state().piles();
    assert_eq!(piles.hand().len(), 5);
    assert_eq!(piles.deck().len(), 26);

    let expected: Vec<CardId> = build_order.iter().rev().take(5).cloned().collect();
    let hand: Vec<CardId> = piles.hand().iter().map(|e| e.id.clone()).collect();
    assert_eq!(hand, expected);

    assert_eq!(engine.draw(), None);
    assert_eq!(engine.state().piles().hand().len(), 5);
    assert_eq!(engine.state().piles().deck().len(), 26);
}

/// Scenario D: start, attach, finalize.
#[test]
fn test_scenario_d_play_with_modifier() {
    let mut engine = DeckEngine::new(catalog(), DeckRules::default(), 7);
    engine.adjust_base_count(&id("b1"), 1);
    // Keep m1 out of the counts so capacity usage starts at zero; put it
    // in the deck through a saved snapshot instead.
    let mut snapshot = engine.snapshot();
    snapshot.deck = vec![id("null"), id("m1"), id("b1")].into_iter().collect();
    snapshot.is_locked = true;
    let mut engine =
        DeckEngine::from_state(catalog(), DeckRules::default(), snapshot.into(), deck_engine::GameRng::new(7));

    engine.draw();
    engine.draw();
    assert_eq!(engine.capacity_used(), 0);

    assert!(engine.start_play(&id("b1")));
    let active = engine.play().active().unwrap();
    assert_eq!(active.base, id("b1"));
    assert!(active.mods.is_empty());

    assert!(engine.toggle_attach(&id("m1")));
    assert_eq!(engine.play().active().unwrap().mods.as_slice(), &[id("m1")]);

    let committed = engine.finalize_play().unwrap();
    assert_eq!(committed.base, id("b1"));

    let piles = engine.state().piles();
    assert!(piles.hand().is_empty());
    assert_eq!(piles.discard().len(), 2);
    assert!(piles.discard().iter().all(|e| e.origin == DiscardOrigin::Played));
    assert_eq!(engine.play(), &PlayState::Idle);
}

/// Scenario E: loading a saved deck overwrites composition and clears play.
#[test]
fn test_scenario_e_load_saved_deck() {
    let mut engine = legal_engine(3);
    engine.adjust_mod_count(&id("m2"), 1);
    engine.generate_deck(true);
    assert!(engine.save_deck("X"));
    let saved_deck = engine.state().piles().deck().clone();

    // Drift away from the saved state.
    engine.adjust_mod_count(&id("m2"), -1);
    engine.adjust_capacity(-4);
    engine.set_locked(true);
    for _ in 0..4 {
        engine.draw();
    }
    let first = engine.state().piles().hand()[0].id.clone();
    engine.discard_from_hand(&first, PileScope::One);
    assert_eq!(engine.state().piles().discard().len(), 1);

    assert_eq!(engine.apply(Command::LoadDeck { name: "X".into() }), Transition::Applied);

    let state = engine.state();
    assert_eq!(state.piles().deck(), &saved_deck);
    assert_eq!(state.counts().mod_count(&id("m2")), 1);
    assert_eq!(state.capacity(), 10);
    assert!(state.piles().hand().is_empty());
    assert!(state.piles().discard().is_empty());
    assert!(!state.is_locked());
}

/// Base counts stay editable while locked; modifier and null edits do not.
#[test]
fn test_lock_asymmetry() {
    let mut engine = legal_engine(1);
    engine.apply(Command::SetLocked(true));

    assert_eq!(
        engine.apply(Command::AdjustBaseCount { id: id("b1"), delta: -1 }),
        Transition::Applied
    );
    assert_eq!(
        engine.apply(Command::AdjustModCount { id: id("m1"), delta: 1 }),
        Transition::Rejected
    );
    assert_eq!(engine.apply(Command::AdjustNullCount { delta: 1 }), Transition::Rejected);
}

/// Once capacity is full, neither count edits nor attachments can add cost.
#[test]
fn test_capacity_saturation_blocks_admission() {
    let mut engine = legal_engine(5);
    assert!(engine.adjust_mod_count(&id("m1"), 2));
    assert!(engine.adjust_mod_count(&id("m2"), 1));
    assert_eq!(engine.capacity_used(), 10);

    assert!(!engine.adjust_mod_count(&id("m1"), 1));
    assert!(!engine.adjust_mod_count(&id("m3"), 1));

    engine.generate_deck(false);
    engine.set_locked(true);
    engine.adjust_hand_limit(40);
    while engine.draw().is_some() {}

    assert!(engine.start_play(&id("b1")));
    assert!(!engine.toggle_attach(&id("m1")));
    assert!(!engine.toggle_attach(&id("m2")));

    engine.adjust_capacity(3);
    assert!(engine.toggle_attach(&id("m1")));
    assert!(!engine.toggle_attach(&id("m2")));
}

/// A full turn cycle: draw, play, discard the rest, recycle on empty deck.
#[test]
fn test_turn_cycle_recycles_discard() {
    let mut engine = legal_engine(11);
    engine.reset();
    engine.set_locked(true);

    let mut draws = 0;
    while draws < 40 {
        while engine.draw().is_some() {
            draws += 1;
        }
        let hand: Vec<CardId> = engine.state().piles().hand().iter().map(|e| e.id.clone()).collect();
        for card in hand {
            engine.discard_from_hand(&card, PileScope::All);
        }
    }

    let piles = engine.state().piles();
    assert_eq!(piles.total_cards(), 31);
    assert!(piles.hand().is_empty());
}

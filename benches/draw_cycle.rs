//! Draw / discard cycle and snapshot benchmarks.
//!
//! ```bash
//! cargo bench --bench draw_cycle
//! ```

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use deck_engine::cards::{Card, CardCategory, CardId, CardRegistry};
use deck_engine::core::DeckRules;
use deck_engine::engine::DeckEngine;
use deck_engine::zones::PileScope;

fn catalog() -> CardRegistry {
    let mut registry = CardRegistry::new(Card::new("null", "Null", CardCategory::Null));
    for i in 0..13 {
        registry.register(Card::new(format!("b{i}"), format!("Base {i}"), CardCategory::Base));
    }
    for i in 0..4 {
        registry.register(
            Card::new(format!("m{i}"), format!("Mod {i}"), CardCategory::Modifier).with_cost(2),
        );
    }
    registry
}

fn ready_engine() -> DeckEngine {
    let mut engine = DeckEngine::new(catalog(), DeckRules::default(), 7);
    for i in 0..13 {
        engine.adjust_base_count(&CardId::new(format!("b{i}")), 2);
    }
    for i in 0..4 {
        engine.adjust_mod_count(&CardId::new(format!("m{i}")), 1);
    }
    engine.reset();
    engine.set_locked(true);
    engine
}

fn bench_turns(c: &mut Criterion) {
    c.bench_function("draw_discard_20_turns", |b| {
        b.iter_batched(
            ready_engine,
            |mut engine| {
                for _ in 0..20 {
                    while engine.draw().is_some() {}
                    let hand: Vec<CardId> = engine
                        .state()
                        .piles()
                        .hand()
                        .iter()
                        .map(|e| e.id.clone())
                        .collect();
                    for id in &hand {
                        engine.discard_from_hand(id, PileScope::One);
                    }
                }
                black_box(engine)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut engine = ready_engine();
    c.bench_function("generate_shuffled_deck", |b| {
        b.iter(|| black_box(engine.generate_deck(true)));
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = ready_engine();
    c.bench_function("snapshot_to_json", |b| {
        b.iter(|| {
            let snapshot = engine.snapshot();
            black_box(serde_json::to_vec(&snapshot))
        });
    });
}

criterion_group!(benches, bench_turns, bench_generate, bench_snapshot);
criterion_main!(benches);

//! Lenient snapshot restore.
//!
//! Persisted data may come from an older build, a changed catalog, or a
//! hand-edited file. Restore never fails: each field that is missing or
//! malformed falls back to its default on its own, and ids the catalog no
//! longer knows are dropped. Counts larger than any deck the engine could
//! build are malformed too.

use std::collections::BTreeMap;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::cards::{CardCatalog, CardId};
use crate::core::config::DeckRules;
use crate::core::counts::SelectionCounts;
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::{BuilderState, SavedDeck};
use crate::zones::{DiscardEntry, HandEntry, Piles};

/// Rebuild a builder state from stored JSON, or defaults for `None`.
#[must_use]
pub fn restore_state<C: CardCatalog + ?Sized>(
    value: Option<&Value>,
    catalog: &C,
    rules: &DeckRules,
) -> BuilderState {
    let defaults = BuilderState::new(rules);
    let Some(value) = value else {
        return defaults;
    };
    let Some(obj) = value.as_object() else {
        warn!("snapshot is not an object, using defaults");
        return defaults;
    };

    let mut counts = SelectionCounts {
        base: count_map(obj, "baseCounts", |id| catalog.is_base(id)),
        modifiers: count_map(obj, "modCounts", |id| catalog.is_modifier(id)),
        nulls: field_u32(obj, "nullCount").unwrap_or(defaults.counts.nulls),
    };
    if counts.base_total() > rules.base_target {
        warn!(total = counts.base_total(), "baseCounts over the base target, using default");
        counts.base.clear();
    }
    if counts.mod_total() > rules.max_restored_cards {
        warn!(total = counts.mod_total(), "modCounts out of range, using default");
        counts.modifiers.clear();
    }
    if counts.nulls > rules.max_restored_cards {
        warn!(nulls = counts.nulls, "nullCount out of range, using default");
        counts.nulls = defaults.counts.nulls;
    }

    let deck = id_list(obj, "deck", catalog);
    let hand: Vector<HandEntry> = entry_list(obj, "hand", |e: &HandEntry| catalog.contains(&e.id));
    let discard: Vector<DiscardEntry> =
        entry_list(obj, "discard", |e: &DiscardEntry| catalog.contains(&e.id));

    let hand_limit = obj
        .get("handLimit")
        .and_then(Value::as_u64)
        .filter(|&n| n <= u64::from(u32::MAX))
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n >= rules.min_hand_limit)
        .unwrap_or_else(|| {
            note_default("handLimit", obj);
            defaults.hand_limit
        });

    BuilderState {
        counts,
        capacity: field_u32(obj, "modifierCapacity").unwrap_or(defaults.capacity),
        piles: Piles::from_parts(deck, hand, discard),
        locked: match obj.get("isLocked").and_then(Value::as_bool) {
            Some(b) => b,
            None => {
                note_default("isLocked", obj);
                defaults.locked
            }
        },
        hand_limit,
        deck_name: match obj.get("deckName").and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => {
                note_default("deckName", obj);
                defaults.deck_name
            }
        },
        saved_decks: saved_decks(obj, catalog, rules),
    }
}

/// Resume the stored shuffle stream, or start a fresh one from `seed`.
pub(crate) fn restore_rng(value: Option<&Value>, seed: u64) -> GameRng {
    let Some(raw) = value.and_then(|v| v.get("rngState")).filter(|v| !v.is_null()) else {
        return GameRng::new(seed);
    };
    match serde_json::from_value::<GameRngState>(raw.clone()) {
        Ok(state) => GameRng::from_state(&state),
        Err(e) => {
            warn!(error = %e, "malformed rngState, reseeding");
            GameRng::new(seed)
        }
    }
}

/// Check that saved counts describe a deck the engine could have built.
fn counts_in_bounds(counts: &SelectionCounts, rules: &DeckRules) -> bool {
    counts.base_total() <= rules.base_target
        && counts.mod_total() <= rules.max_restored_cards
        && counts.nulls <= rules.max_restored_cards
}

fn note_default(field: &str, obj: &Map<String, Value>) {
    if obj.contains_key(field) {
        warn!(field, "malformed snapshot field, using default");
    }
}

fn field_u32(obj: &Map<String, Value>, field: &str) -> Option<u32> {
    let parsed = obj
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok());
    if parsed.is_none() {
        note_default(field, obj);
    }
    parsed
}

fn count_map(
    obj: &Map<String, Value>,
    field: &str,
    known: impl Fn(&CardId) -> bool,
) -> FxHashMap<CardId, u32> {
    let Some(entries) = obj.get(field).and_then(Value::as_object) else {
        note_default(field, obj);
        return FxHashMap::default();
    };

    let mut counts = FxHashMap::default();
    for (key, raw) in entries {
        let id = CardId::new(key.as_str());
        let count = raw.as_u64().and_then(|n| u32::try_from(n).ok());
        match count {
            Some(0) => {}
            Some(n) if known(&id) => {
                counts.insert(id, n);
            }
            Some(_) => warn!(field, %id, "dropping count for unknown card"),
            None => warn!(field, %id, "dropping malformed count"),
        }
    }
    counts
}

fn id_list<C: CardCatalog + ?Sized>(
    obj: &Map<String, Value>,
    field: &str,
    catalog: &C,
) -> Vector<CardId> {
    entry_list(obj, field, |id: &CardId| catalog.contains(id))
}

fn entry_list<T, F>(obj: &Map<String, Value>, field: &str, keep: F) -> Vector<T>
where
    T: DeserializeOwned + Clone,
    F: Fn(&T) -> bool,
{
    let Some(items) = obj.get(field).and_then(Value::as_array) else {
        note_default(field, obj);
        return Vector::new();
    };

    let mut out = Vector::new();
    let mut dropped = 0usize;
    for item in items {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(entry) if keep(&entry) => out.push_back(entry),
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!(field, dropped, "dropped unreadable or unknown entries");
    }
    out
}

fn saved_decks<C: CardCatalog + ?Sized>(
    obj: &Map<String, Value>,
    catalog: &C,
    rules: &DeckRules,
) -> BTreeMap<String, SavedDeck> {
    let Some(entries) = obj.get("savedDecks").and_then(Value::as_object) else {
        note_default("savedDecks", obj);
        return BTreeMap::new();
    };

    let mut decks = BTreeMap::new();
    for (name, raw) in entries {
        match serde_json::from_value::<SavedDeck>(raw.clone()) {
            Ok(mut saved) => {
                let stale = saved.counts.retain_catalog(catalog);
                if !stale.is_empty() {
                    warn!(name = %name, stale = stale.len(), "saved deck had unknown cards");
                }
                if !counts_in_bounds(&saved.counts, rules) {
                    warn!(name = %name, "dropping saved deck with out-of-range counts");
                    continue;
                }
                saved.deck.retain(|id| catalog.contains(id));
                decks.insert(name.clone(), saved);
            }
            Err(e) => warn!(name = %name, error = %e, "dropping unreadable saved deck"),
        }
    }
    decks
}

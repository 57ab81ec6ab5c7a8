//! Deck assembly and legality.
//!
//! A deck is legal when it holds exactly `base_target` base cards, at least
//! `min_nulls` null cards, and its modifiers fit under the capacity. The
//! count adjustments here refuse any edit that breaks a hard limit and
//! report whether anything changed.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::capacity::{capacity_used, fits};
use crate::cards::{CardCatalog, CardId};
use crate::core::config::DeckRules;
use crate::core::counts::SelectionCounts;

/// A reason the current selection is not a legal deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckViolation {
    /// Base total differs from the required count.
    BaseCount { expected: u32, actual: u32 },
    /// Fewer null cards than required.
    TooFewNulls { min: u32, actual: u32 },
    /// Modifier cost exceeds capacity.
    OverCapacity { used: u32, capacity: u32 },
}

impl std::fmt::Display for DeckViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckViolation::BaseCount { expected, actual } => {
                write!(f, "base cards: {actual}/{expected}")
            }
            DeckViolation::TooFewNulls { min, actual } => {
                write!(f, "null cards: {actual}, need at least {min}")
            }
            DeckViolation::OverCapacity { used, capacity } => {
                write!(f, "modifier capacity: {used}/{capacity}")
            }
        }
    }
}

/// Snapshot of deck legality for display.
///
/// Computed fresh on every call to [`validate`]; never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStatus {
    pub base_total: u32,
    pub base_target: u32,
    pub null_count: u32,
    pub min_nulls: u32,
    pub capacity_used: u32,
    pub capacity: u32,
    pub violations: Vec<DeckViolation>,
}

impl DeckStatus {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check the selection against the deck rules.
#[must_use]
pub fn validate<C: CardCatalog + ?Sized>(
    catalog: &C,
    rules: &DeckRules,
    counts: &SelectionCounts,
    capacity: u32,
) -> DeckStatus {
    let base_total = counts.base_total();
    let used = capacity_used(catalog, &counts.modifiers);

    let mut violations = Vec::new();
    if base_total != rules.base_target {
        violations.push(DeckViolation::BaseCount {
            expected: rules.base_target,
            actual: base_total,
        });
    }
    if counts.nulls < rules.min_nulls {
        violations.push(DeckViolation::TooFewNulls {
            min: rules.min_nulls,
            actual: counts.nulls,
        });
    }
    if used > capacity {
        violations.push(DeckViolation::OverCapacity { used, capacity });
    }

    DeckStatus {
        base_total,
        base_target: rules.base_target,
        null_count: counts.nulls,
        min_nulls: rules.min_nulls,
        capacity_used: used,
        capacity,
        violations,
    }
}

/// Expand counts into the canonical unshuffled deck.
///
/// Base ids in catalog order, then modifier ids in catalog order, then the
/// null id, each repeated by its count. Index 0 is the bottom of the deck.
#[must_use]
pub fn build_deck_array<C: CardCatalog + ?Sized>(
    catalog: &C,
    counts: &SelectionCounts,
) -> Vector<CardId> {
    let mut deck = Vector::new();
    for card in catalog.base_cards() {
        let n = counts.base_count(&card.id);
        deck.extend(std::iter::repeat(card.id.clone()).take(n as usize));
    }
    for card in catalog.modifier_cards() {
        let n = counts.mod_count(&card.id);
        deck.extend(std::iter::repeat(card.id.clone()).take(n as usize));
    }
    let null = &catalog.null_card().id;
    deck.extend(std::iter::repeat(null.clone()).take(counts.nulls as usize));
    deck
}

fn apply_delta(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(0, i64::from(u32::MAX)) as u32
}

/// Change the count of a base card.
///
/// The result is clamped at 0. Any increase that would push the base total
/// above `base_target` is refused outright.
pub fn adjust_base_count<C: CardCatalog + ?Sized>(
    catalog: &C,
    rules: &DeckRules,
    counts: &mut SelectionCounts,
    id: &CardId,
    delta: i32,
) -> bool {
    if !catalog.is_base(id) {
        return false;
    }
    let current = counts.base_count(id);
    let next = apply_delta(current, delta);
    if next == current {
        return false;
    }
    if next > current {
        let total = counts.base_total() - current + next;
        if total > rules.base_target {
            return false;
        }
    }
    counts.set_base(id.clone(), next);
    true
}

/// Change the count of a modifier card.
///
/// Increases must fit under `capacity`; decreases always succeed down to 0.
pub fn adjust_mod_count<C: CardCatalog + ?Sized>(
    catalog: &C,
    counts: &mut SelectionCounts,
    capacity: u32,
    id: &CardId,
    delta: i32,
) -> bool {
    if !catalog.is_modifier(id) {
        return false;
    }
    let current = counts.mod_count(id);
    let next = apply_delta(current, delta);
    if next == current {
        return false;
    }
    if next > current {
        let extra = (next - current).saturating_mul(catalog.cost(id));
        if !fits(capacity_used(catalog, &counts.modifiers), extra, capacity) {
            return false;
        }
    }
    counts.set_mod(id.clone(), next);
    true
}

/// Change the null count, never going below `min_nulls`.
pub fn adjust_null_count(rules: &DeckRules, counts: &mut SelectionCounts, delta: i32) -> bool {
    let next = apply_delta(counts.nulls, delta).max(rules.min_nulls);
    if next == counts.nulls {
        return false;
    }
    counts.nulls = next;
    true
}

/// Change the modifier capacity, never going below 0.
pub fn adjust_capacity(capacity: &mut u32, delta: i32) -> bool {
    let next = apply_delta(*capacity, delta);
    if next == *capacity {
        return false;
    }
    *capacity = next;
    true
}

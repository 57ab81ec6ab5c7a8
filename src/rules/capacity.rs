//! Modifier capacity calculation.
//!
//! Pure functions over selection counts and catalog costs. Unknown ids
//! cost 0; nothing here can fail.

use rustc_hash::FxHashMap;

use crate::cards::{CardCatalog, CardId};

/// Summed cost of every selected modifier copy.
#[must_use]
pub fn capacity_used<C: CardCatalog + ?Sized>(
    catalog: &C,
    mod_counts: &FxHashMap<CardId, u32>,
) -> u32 {
    mod_counts
        .iter()
        .map(|(id, &count)| count.saturating_mul(catalog.cost(id)))
        .fold(0u32, u32::saturating_add)
}

/// Check whether one more copy of `candidate` fits under `capacity`.
#[must_use]
pub fn can_admit<C: CardCatalog + ?Sized>(
    catalog: &C,
    mod_counts: &FxHashMap<CardId, u32>,
    capacity: u32,
    candidate: &CardId,
) -> bool {
    fits(capacity_used(catalog, mod_counts), catalog.cost(candidate), capacity)
}

/// Check whether adding `extra` cost to `used` stays within `capacity`.
#[must_use]
pub fn fits(used: u32, extra: u32, capacity: u32) -> bool {
    used.checked_add(extra).is_some_and(|total| total <= capacity)
}

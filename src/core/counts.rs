//! Selection counts: how many copies of each card the deck should hold.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId};

/// Per-card quantities chosen in the builder.
///
/// Absent keys are implicitly zero; a count that drops to zero removes its
/// key so the maps only ever hold positive entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCounts {
    /// Base card id -> copies.
    #[serde(default)]
    pub base: FxHashMap<CardId, u32>,

    /// Modifier card id -> copies.
    #[serde(default)]
    pub modifiers: FxHashMap<CardId, u32>,

    /// Copies of the null card.
    #[serde(default)]
    pub nulls: u32,
}

impl SelectionCounts {
    /// Create counts with no base or modifier cards.
    #[must_use]
    pub fn with_nulls(nulls: u32) -> Self {
        Self {
            nulls,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn base_count(&self, id: &CardId) -> u32 {
        self.base.get(id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn mod_count(&self, id: &CardId) -> u32 {
        self.modifiers.get(id).copied().unwrap_or(0)
    }

    /// Total base cards across all ids. Saturates at `u32::MAX`.
    #[must_use]
    pub fn base_total(&self) -> u32 {
        self.base.values().fold(0u32, |acc, &n| acc.saturating_add(n))
    }

    /// Total modifier cards across all ids. Saturates at `u32::MAX`.
    #[must_use]
    pub fn mod_total(&self) -> u32 {
        self.modifiers.values().fold(0u32, |acc, &n| acc.saturating_add(n))
    }

    /// Set a base count, dropping the key at zero.
    pub fn set_base(&mut self, id: CardId, count: u32) {
        set_or_remove(&mut self.base, id, count);
    }

    /// Set a modifier count, dropping the key at zero.
    pub fn set_mod(&mut self, id: CardId, count: u32) {
        set_or_remove(&mut self.modifiers, id, count);
    }

    /// Drop entries whose ids are not base/modifier cards in `catalog`.
    ///
    /// Returns the ids that were removed.
    pub fn retain_catalog<C: CardCatalog + ?Sized>(&mut self, catalog: &C) -> Vec<CardId> {
        let mut dropped = Vec::new();
        self.base.retain(|id, count| {
            let keep = *count > 0 && catalog.is_base(id);
            if !keep {
                dropped.push(id.clone());
            }
            keep
        });
        self.modifiers.retain(|id, count| {
            let keep = *count > 0 && catalog.is_modifier(id);
            if !keep {
                dropped.push(id.clone());
            }
            keep
        });
        dropped
    }
}

fn set_or_remove(map: &mut FxHashMap<CardId, u32>, id: CardId, count: u32) {
    if count == 0 {
        map.remove(&id);
    } else {
        map.insert(id, count);
    }
}

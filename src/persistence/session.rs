//! Auto-saving session: engine plus store.
//!
//! After every applied command the session writes a complete snapshot.
//! Write failures are logged and otherwise ignored; the in-memory state
//! stays authoritative.

use tracing::warn;

use super::restore::{restore_rng, restore_state};
use super::store::SnapshotStore;
use crate::cards::CardCatalog;
use crate::core::config::DeckRules;
use crate::engine::{Command, DeckEngine, Transition};

impl<C: CardCatalog> DeckEngine<C> {
    /// Build an engine from whatever `store` holds.
    ///
    /// Missing, unreadable or partially malformed data falls back to
    /// defaults; this never fails. `seed` is used only when the snapshot
    /// carries no shuffle position.
    #[must_use]
    pub fn restore<S: SnapshotStore + ?Sized>(
        catalog: C,
        rules: DeckRules,
        seed: u64,
        store: &S,
    ) -> Self {
        let raw = match store.read() {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "could not read snapshot, starting fresh");
                None
            }
        };
        let state = restore_state(raw.as_ref(), &catalog, &rules);
        let rng = restore_rng(raw.as_ref(), seed);
        Self::from_state(catalog, rules, state, rng)
    }
}

/// Engine that persists itself after each applied command.
pub struct Session<C: CardCatalog, S: SnapshotStore> {
    engine: DeckEngine<C>,
    store: S,
}

impl<C: CardCatalog, S: SnapshotStore> Session<C, S> {
    /// Open a session, restoring from `store`.
    #[must_use]
    pub fn open(catalog: C, rules: DeckRules, seed: u64, store: S) -> Self {
        let engine = DeckEngine::restore(catalog, rules, seed, &store);
        Self { engine, store }
    }

    /// Wrap an existing engine.
    #[must_use]
    pub fn with_engine(engine: DeckEngine<C>, store: S) -> Self {
        Self { engine, store }
    }

    #[must_use]
    pub fn engine(&self) -> &DeckEngine<C> {
        &self.engine
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a command and persist the result if it changed anything.
    pub fn apply(&mut self, command: Command) -> Transition {
        let transition = self.engine.apply(command);
        if transition.is_applied() {
            self.save();
        }
        transition
    }

    /// Write the current snapshot now. Returns false if the write failed.
    pub fn save(&self) -> bool {
        match self.store.write(&self.engine.snapshot()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "snapshot write failed");
                false
            }
        }
    }

    /// Split the session back into engine and store.
    #[must_use]
    pub fn into_parts(self) -> (DeckEngine<C>, S) {
        (self.engine, self.store)
    }
}

//! Commands accepted by the engine.
//!
//! A `Command` names one discrete user action. The engine applies it as an
//! atomic transition and reports whether anything changed.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::zones::{PileScope, ReturnShuffle};

/// A single engine command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    // === Deck composition ===
    AdjustBaseCount { id: CardId, delta: i32 },
    AdjustModCount { id: CardId, delta: i32 },
    AdjustNullCount { delta: i32 },
    AdjustCapacity { delta: i32 },
    AdjustHandLimit { delta: i32 },

    // === Deck / hand / discard ===
    GenerateDeck { shuffle: bool },
    Shuffle,
    Draw,
    Reset,
    Discard { id: CardId, scope: PileScope },
    TogglePlayed { id: CardId },
    ReturnToDeck {
        id: CardId,
        scope: PileScope,
        shuffle: ReturnShuffle,
    },
    ReturnToHand { id: CardId, scope: PileScope },
    RecycleDiscard,
    SetLocked(bool),
    ToggleLock,

    // === Play selection ===
    StartPlay { id: CardId },
    ToggleAttach { id: CardId },
    FinalizePlay,
    CancelPlay,

    // === Saved decks ===
    SetDeckName { name: String },
    SaveDeck { name: String },
    LoadDeck { name: String },
    DeleteDeck { name: String },
}

/// Outcome of applying a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// State changed.
    Applied,
    /// Command was illegal in the current state; nothing changed.
    Rejected,
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Transition::Applied
    }
}

impl From<bool> for Transition {
    fn from(applied: bool) -> Self {
        if applied {
            Transition::Applied
        } else {
            Transition::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_from_bool() {
        assert_eq!(Transition::from(true), Transition::Applied);
        assert_eq!(Transition::from(false), Transition::Rejected);
        assert!(Transition::Applied.is_applied());
    }

    #[test]
    fn test_command_serde() {
        let cmd = Command::ReturnToDeck {
            id: CardId::new("b-1"),
            scope: PileScope::All,
            shuffle: ReturnShuffle::Returned,
        };

        let json = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}

//! First-class intents forwarded by a presentation layer.
//!
//! Intents are the player's requests, not side effects. They can be
//! validated against a [`GameState`](crate::GameState) before anything
//! changes, serialized into replay scripts, and logged.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A request to change the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    /// Place the mover's mark on a cell (0-8).
    Play {
        /// Board index of the cell.
        cell: usize,
    },
    /// Display a recorded step.
    JumpTo {
        /// Index into the history.
        step: usize,
    },
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Play { cell } => write!(f, "play cell {}", cell),
            Intent::JumpTo { step } => write!(f, "jump to step {}", step),
        }
    }
}

/// Reason an intent had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// Cell index outside the board.
    #[display("Cell {} is outside the board", _0)]
    CellOutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(#[error(not(source))] Player),

    /// Step index not present in the history.
    #[display("Step {} is not in the history (length {})", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time.
        len: usize,
    },
}

/// What applying an intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game changed.
    Applied,
    /// Nothing changed.
    Ignored(Rejection),
}

impl Outcome {
    /// True when the intent changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// The rejection, when ignored.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Applied => None,
            Outcome::Ignored(reason) => Some(*reason),
        }
    }
}

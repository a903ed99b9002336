//! Strictly tic-tac-toe - pure game logic with move history
//!
//! The game records a board snapshot after every move. Any snapshot can be
//! displayed again ("time travel"), and playing from an earlier snapshot
//! drops the moves that followed it.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure win detection over a board
//! - **History**: [`GameHistory`] of [`HistoryEntry`] snapshots
//! - **Game**: [`GameState`], the history plus the displayed step
//! - **Contracts**: pre/postconditions checked on every transition
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, Player, Status};
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 3, 2, 6] {
//!     game.play(cell);
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//!
//! game.jump_to(0);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod status;
mod types;

pub use action::{Intent, Outcome, Rejection};
pub use contracts::{Contract, JumpContract, NoWinnerYet, PlayContract, SquareIsEmpty};
pub use game::{GameState, MoveListEntry};
pub use history::{GameHistory, HistoryEntry};
pub use invariants::{
    describe, AlternatingMarksInvariant, EmptyStartInvariant, GameInvariants, InvalidGameState,
    Invariant, InvariantSet, InvariantViolation, SingleCellDeltaInvariant, StepInBoundsInvariant,
};
pub use position::Position;
pub use rules::{winner, winning_line, LINES};
pub use status::Status;
pub use types::{Board, Player, Square};

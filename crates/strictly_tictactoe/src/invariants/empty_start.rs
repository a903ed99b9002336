//! Empty start invariant: the first recorded board is empty.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: History entry 0 is the empty board.
pub struct EmptyStartInvariant;

impl Invariant<GameState> for EmptyStartInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .get(0)
            .is_some_and(|entry| *entry.board() == Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

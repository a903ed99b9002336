//! Step bounds invariant: the displayed step is a recorded one.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Displayed step is within the history"
    }
}

//! First-class invariants for tic-tac-toe with history.
//!
//! Invariants are logical properties of a [`GameState`](crate::GameState)
//! that every play and jump must preserve. They are checked after each
//! transition in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Joins violation descriptions into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A stored game or history that fails its invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game state: {} at {}:{}", message, file, line)]
pub struct InvalidGameState {
    /// What was wrong.
    pub message: String,
    /// Line where the error was raised.
    pub line: u32,
    /// File where the error was raised.
    pub file: &'static str,
}

impl InvalidGameState {
    /// Creates an error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_marks;
pub mod empty_start;
pub mod single_cell_delta;
pub mod step_in_bounds;

pub use alternating_marks::AlternatingMarksInvariant;
pub use empty_start::EmptyStartInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    EmptyStartInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarksInvariant,
    StepInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut game = GameState::new();
        for cell in [4, 0, 8, 2] {
            game.play(cell);
        }
        game.jump_to(1);
        game.play(6);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::new();
        game.play(4);
        game.history.entries[0]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));
        game.current_step = 7;

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(describe(&violations).contains("empty board"));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyStartInvariant, StepInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}

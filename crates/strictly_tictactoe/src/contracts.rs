//! Contract-based validation for plays and jumps.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. A failed precondition means the intent is ignored. A
//! failed postcondition is a bug and is only checked in debug builds.

use super::action::Rejection;
use super::game::GameState;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{rules, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The displayed board has no winner yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Rejects plays on a won board.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), Rejection> {
        match rules::winner(game.current_board()) {
            Some(winner) => Err(Rejection::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the position is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects plays on a taken square.
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &GameState) -> Result<(), Rejection> {
        if game.current_board().is_empty(*pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(*pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract
// ─────────────────────────────────────────────────────────────

/// Contract for playing a position on the displayed board.
///
/// Preconditions:
/// - Displayed board has no winner
/// - Square is empty
///
/// Postconditions:
/// - Entries up to the old step are untouched
/// - Exactly one entry follows them, and it is displayed
/// - All game invariants hold
pub struct PlayContract;

impl Contract<GameState, Position> for PlayContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), Rejection> {
        NoWinnerYet::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = invariant_violations(after);

        let kept = before.current_step() + 1;
        let history = after.history().entries();
        if history.len() != kept + 1 {
            violations.push(InvariantViolation::new(
                "Play records exactly one entry after the displayed step",
            ));
        }
        if history.get(..kept) != before.history().entries().get(..kept) {
            violations.push(InvariantViolation::new(
                "Play leaves earlier entries untouched",
            ));
        }
        if after.current_step() + 1 != history.len() {
            violations.push(InvariantViolation::new("Play displays the new entry"));
        }

        finish(violations)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for jumping to a recorded step.
///
/// Precondition: the step is recorded.
/// Postcondition: the history is unchanged and all invariants hold.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    fn pre(game: &GameState, step: &usize) -> Result<(), Rejection> {
        let len = game.history().len();
        if *step < len {
            Ok(())
        } else {
            Err(Rejection::StepOutOfRange { step: *step, len })
        }
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = invariant_violations(after);
        if before.history() != after.history() {
            violations.push(InvariantViolation::new("Jump leaves the history untouched"));
        }
        finish(violations)
    }
}

fn invariant_violations(game: &GameState) -> Vec<InvariantViolation> {
    GameInvariants::check_all(game).err().unwrap_or_default()
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        warn!(count = violations.len(), "Postcondition violated");
        Err(violations)
    }
}

//! Alternating marks invariant: X, O, X, O, ... down the history.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: The mark added to reach entry `k` belongs to the player
/// whose turn it was at step `k - 1`.
///
/// X places on odd entries (1, 3, 5, ...), O on even ones.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .entries()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = Player::for_step(step);
                let (before, after) = (pair[0].board(), pair[1].board());
                Position::ALL.iter().all(|pos| {
                    match (before.get(*pos), after.get(*pos)) {
                        (Square::Empty, Square::Occupied(placed)) => placed == expected,
                        _ => true,
                    }
                })
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameState::new();
        for cell in [0, 4, 8, 2, 6] {
            game.play(cell);
        }
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.play(0);
        let board = game
            .current_board()
            .with_mark(Position::Center, Player::X);
        game.history.branch(1, board);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_rewritten_branch_holds() {
        let mut game = GameState::new();
        for cell in [0, 4, 8] {
            game.play(cell);
        }
        game.jump_to(1);
        game.play(2);
        game.play(6);
        assert_eq!(game.history().len(), 4);
        assert!(AlternatingMarksInvariant::holds(&game));
    }
}

//! Single cell delta invariant: each step adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: Adjacent history entries differ in exactly one square,
/// and that square was empty in the earlier entry.
///
/// This is what keeps earlier snapshots honest: a mark, once recorded,
/// is never overwritten or erased by a later step.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            match before.diff(after).as_slice() {
                [pos] => before.get(*pos) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step places exactly one mark on an empty square"
    }
}

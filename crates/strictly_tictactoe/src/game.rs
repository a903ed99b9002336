//! Game state with move history and time travel.
//!
//! [`GameState`] stores only the recorded boards and the step being
//! displayed. Whose turn it is, the winner and the status line are all
//! derived from those two on demand.

use super::action::{Intent, Outcome, Rejection};
use super::contracts::{Contract, JumpContract, PlayContract};
use super::history::GameHistory;
use super::invariants::{describe, GameInvariants, InvalidGameState, InvariantSet};
use super::rules;
use super::status::Status;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One row of the move list shown beside the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// "Go to game start" or "Go to move #k".
    pub label: String,
    /// The move that produced this step; `None` for the game start.
    pub played: Option<(Player, Position)>,
    /// Whether this step is the one displayed.
    pub current: bool,
}

/// Tic-tac-toe game with time travel.
///
/// Deserializing checks every game invariant, so a stored game that
/// skips a turn or points past its history is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: GameHistory,
    pub(crate) current_step: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: GameHistory,
    current_step: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidGameState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            current_step: raw.current_step,
        };
        GameInvariants::check_all(&game)
            .map_err(|violations| InvalidGameState::new(describe(&violations)))?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a game showing the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
            current_step: 0,
        }
    }

    /// Every board recorded so far.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Index of the displayed board.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        // current_step is kept below history.len()
        self.history.entries[self.current_step].board()
    }

    /// Player whose mark the next play places.
    pub fn turn(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winner of the displayed board.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self.current_board())
    }

    /// Completed line on the displayed board, for highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board()).map(|(_, line)| line)
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.turn()),
        }
    }

    /// Plays the cell at board index `cell` (0-8).
    ///
    /// Ignored when the index is off the board, the displayed board is
    /// already won, or the square is taken.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn play(&mut self, cell: usize) -> Outcome {
        match Position::from_index(cell) {
            Some(pos) => self.play_at(pos),
            None => {
                let reason = Rejection::CellOutOfBounds(cell);
                debug!(%reason, "Ignoring play");
                Outcome::Ignored(reason)
            }
        }
    }

    /// Plays `pos` on the displayed board.
    ///
    /// Any steps after the displayed one are dropped before the new board
    /// is recorded, and the new board becomes the displayed one.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn play_at(&mut self, pos: Position) -> Outcome {
        if let Err(reason) = PlayContract::pre(self, &pos) {
            debug!(%reason, "Ignoring play");
            return Outcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.turn();
        let board = self.current_board().with_mark(pos, player);
        self.current_step = self.history.branch(self.current_step, board);
        info!(%player, position = %pos, step = self.current_step, "Move played");

        #[cfg(debug_assertions)]
        if let Err(violations) = PlayContract::post(&before, self) {
            panic!("Play postcondition failed: {}", describe(&violations));
        }

        Outcome::Applied
    }

    /// Displays the board recorded at `step`.
    ///
    /// The history is left as is; only the displayed step moves.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Outcome {
        if let Err(reason) = JumpContract::pre(self, &step) {
            debug!(%reason, "Ignoring jump");
            return Outcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.current_step = step;
        info!(step, "Jumped");

        #[cfg(debug_assertions)]
        if let Err(violations) = JumpContract::post(&before, self) {
            panic!("Jump postcondition failed: {}", describe(&violations));
        }

        Outcome::Applied
    }

    /// Applies an intent from the presentation layer.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Play { cell } => self.play(cell),
            Intent::JumpTo { step } => self.jump_to(step),
        }
    }

    /// One entry per recorded step, oldest first.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        (0..self.history.len())
            .map(|step| MoveListEntry {
                step,
                label: if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", step)
                },
                played: self.history.move_at(step),
                current: step == self.current_step,
            })
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_play_places_mover_mark() {
        let mut game = GameState::new();
        assert!(game.play(4).is_applied());
        assert_eq!(
            game.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut game = GameState::new();
        assert_eq!(
            game.play(9),
            Outcome::Ignored(Rejection::CellOutOfBounds(9))
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut game = GameState::new();
        game.play(0);
        let snapshot = game.clone();
        assert_eq!(
            game.jump_to(2),
            Outcome::Ignored(Rejection::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_game_over_rejected_before_occupancy() {
        let mut game = GameState::new();
        for cell in [0, 1, 3, 2, 6] {
            game.play(cell);
        }
        // Cell 0 is both taken and on a won board; game over wins.
        assert_eq!(game.play(0), Outcome::Ignored(Rejection::GameOver(Player::X)));
    }

    #[test]
    fn test_winning_line_on_current_board() {
        let mut game = GameState::new();
        for cell in [0, 1, 3, 2, 6] {
            game.play(cell);
        }
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
        );
        game.jump_to(4);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_move_list_labels() {
        let mut game = GameState::new();
        game.play(4);
        game.play(0);
        let list = game.move_list();
        let labels: Vec<_> = list.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
        assert_eq!(list[1].played, Some((Player::X, Position::Center)));
        assert_eq!(list[2].played, Some((Player::O, Position::TopLeft)));
        assert!(list[2].current);
        assert!(!list[0].current);
    }

    #[test]
    fn test_apply_dispatches_intents() {
        let mut game = GameState::new();
        assert!(game.apply(Intent::Play { cell: 8 }).is_applied());
        assert!(game.apply(Intent::JumpTo { step: 0 }).is_applied());
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.history().len(), 2);
    }
}

//! Tests for game state, history and time travel.

use strictly_tictactoe::{
    Board, GameInvariants, GameState, Intent, InvariantSet, Outcome, Player, Position, Rejection,
    Square, Status, winner,
};

fn played(cells: &[usize]) -> GameState {
    let mut game = GameState::new();
    for cell in cells {
        assert!(game.play(*cell).is_applied(), "cell {} should be playable", cell);
    }
    game
}

#[test]
fn test_double_play_on_same_cell_is_ignored() {
    let mut game = GameState::new();

    assert!(game.play(0).is_applied());
    assert_eq!(
        game.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.history().len(), 2);

    let snapshot = game.clone();
    assert_eq!(
        game.play(0),
        Outcome::Ignored(Rejection::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(game, snapshot);
    assert_eq!(
        game.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );

    assert!(game.play(4).is_applied());
    assert_eq!(
        game.current_board().get(Position::Center),
        Square::Occupied(Player::O)
    );
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_column_win_stops_further_plays() {
    let mut game = played(&[0, 1, 3, 2, 6]);

    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");

    let snapshot = game.clone();
    for cell in [4, 5, 7, 8] {
        assert_eq!(game.play(cell), Outcome::Ignored(Rejection::GameOver(Player::X)));
    }
    assert_eq!(game, snapshot);
}

#[test]
fn test_jump_to_start_keeps_history() {
    let mut game = played(&[0, 1, 3, 2, 6]);

    assert!(game.jump_to(0).is_applied());
    assert_eq!(game.current_step(), 0);
    assert_eq!(*game.current_board(), Board::new());
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status().to_string(), "Next player: X");
}

#[test]
fn test_jump_then_play_rewrites_future() {
    let mut game = played(&[0, 1, 3, 2, 6]);
    let kept: Vec<_> = game.history().entries()[..=2].to_vec();

    game.jump_to(2);
    assert_eq!(game.turn(), Player::X);
    assert!(game.play(8).is_applied());

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_step(), 3);
    assert_eq!(&game.history().entries()[..=2], kept.as_slice());
    assert_eq!(
        game.current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.current_board().get(Position::MiddleLeft), Square::Empty);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_replay_after_win_from_earlier_step() {
    let mut game = played(&[0, 1, 3, 2, 6]);
    game.jump_to(4);
    assert_eq!(game.winner(), None);

    // X can win the same way again.
    assert!(game.play(6).is_applied());
    assert_eq!(game.current_board().get(Position::BottomLeft), Square::Occupied(Player::X));
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.winner(), Some(Player::X));

    // From step 3 it is O who takes that square.
    game.jump_to(3);
    assert!(game.play(6).is_applied());
    assert_eq!(
        game.current_board().get(Position::BottomLeft),
        Square::Occupied(Player::O)
    );
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_jump_does_not_touch_history() {
    let mut game = played(&[4, 0, 8]);
    let history = game.history().clone();

    for step in [2, 0, 3, 1] {
        assert!(game.jump_to(step).is_applied());
        assert_eq!(game.history(), &history);
        assert_eq!(game.turn(), Player::for_step(step));
    }
    assert!(!game.jump_to(4).is_applied());
    assert_eq!(game.current_step(), 1);
}

#[test]
fn test_full_board_without_winner_reports_next_player() {
    // X O X / X O O / O X X
    let game = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.current_board().occupied(), 9);
    assert_eq!(game.winner(), None);
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_winner_is_pure_over_boards() {
    assert_eq!(winner(&Board::new()), None);

    let mixed = Board::new()
        .with_mark(Position::TopLeft, Player::X)
        .with_mark(Position::Center, Player::O)
        .with_mark(Position::BottomRight, Player::X);
    assert_eq!(winner(&mixed), None);

    let anti = Board::new()
        .with_mark(Position::TopRight, Player::O)
        .with_mark(Position::Center, Player::O)
        .with_mark(Position::BottomLeft, Player::O);
    assert_eq!(winner(&anti), Some(Player::O));
}

/// Small deterministic generator so sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[test]
fn test_generated_sequences_keep_invariants() {
    for seed in 0..200 {
        let mut rng = Lcg(seed);
        let mut game = GameState::new();

        for _ in 0..40 {
            let intent = if rng.next(4) == 0 {
                Intent::JumpTo {
                    step: rng.next(game.history().len() + 1),
                }
            } else {
                Intent::Play { cell: rng.next(10) }
            };

            let before = game.clone();
            let outcome = game.apply(intent);

            match (intent, outcome) {
                (_, Outcome::Ignored(_)) => assert_eq!(game, before),
                (Intent::Play { .. }, Outcome::Applied) => {
                    assert_eq!(game.history().len(), before.current_step() + 2);
                    assert_eq!(game.current_step(), game.history().len() - 1);
                    let delta = before.current_board().diff(game.current_board());
                    assert_eq!(delta.len(), 1);
                    assert_eq!(
                        game.current_board().get(delta[0]),
                        Square::Occupied(Player::for_step(before.current_step()))
                    );
                }
                (Intent::JumpTo { step }, Outcome::Applied) => {
                    assert_eq!(game.current_step(), step);
                    assert_eq!(game.history(), before.history());
                }
            }

            assert!(GameInvariants::check_all(&game).is_ok(), "seed {}", seed);
            for pair in game.history().entries().windows(2) {
                assert_eq!(pair[0].board().diff(pair[1].board()).len(), 1);
            }
        }
    }
}

#[test]
fn test_state_serializes() {
    let game = played(&[4, 0]);
    let json = serde_json::to_string(&game).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game);
}

#[test]
fn test_stored_step_past_history_is_refused() {
    let mut stored = serde_json::to_value(GameState::new()).unwrap();
    stored["current_step"] = serde_json::json!(5);

    let err = serde_json::from_value::<GameState>(stored).unwrap_err();
    assert!(err.to_string().contains("Displayed step is within the history"));
}

#[test]
fn test_stored_empty_history_is_refused() {
    let err = serde_json::from_str::<GameState>(r#"{"history":{"entries":[]},"current_step":0}"#)
        .unwrap_err();
    assert!(err.to_string().contains("History has no entries"));
}

#[test]
fn test_stored_skipped_turn_is_refused() {
    let mut stored = serde_json::to_value(played(&[0, 4])).unwrap();
    // O's reply on the center becomes a second X
    stored["history"]["entries"][2]["board"]["squares"][4] = serde_json::json!({"Occupied": "X"});

    let err = serde_json::from_value::<GameState>(stored).unwrap_err();
    assert!(err.to_string().contains("Players alternate marks"));
}

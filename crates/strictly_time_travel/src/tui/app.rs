//! Application state and key handling.

use super::input::{digit_cell, move_cursor, move_selection};
use crossterm::event::KeyCode;
use strictly_tictactoe::{GameState, Intent, Outcome, Position};
use tracing::{debug, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    Board,
    /// The list of recorded steps.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    notice: Option<String>,
    show_locations: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_locations: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            notice: None,
            show_locations,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Why the last intent was ignored, if it was.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether move-list entries show the cell played.
    pub fn show_locations(&self) -> bool {
        self.show_locations
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('[') => {
                if let Some(step) = self.game.current_step().checked_sub(1) {
                    self.apply(Intent::JumpTo { step });
                }
            }
            KeyCode::Char(']') => {
                let step = self.game.current_step() + 1;
                self.apply(Intent::JumpTo { step });
            }
            code => {
                if let Some(cell) = digit_cell(code) {
                    self.apply(Intent::Play { cell });
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::Moves => self.handle_moves_key(code),
                    }
                }
            }
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let cell = self.cursor.to_index();
                self.apply(Intent::Play { cell });
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let step = self.selected;
                self.apply(Intent::JumpTo { step });
            }
            code => {
                self.selected = move_selection(self.selected, self.game.history().len(), code)
            }
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.game.current_step();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus changed");
    }

    /// Forwards an intent to the game and records why it was ignored.
    fn apply(&mut self, intent: Intent) {
        match self.game.apply(intent) {
            Outcome::Applied => {
                debug!(%intent, step = self.game.current_step(), "Intent applied");
                self.notice = None;
                self.selected = self.game.current_step();
            }
            Outcome::Ignored(reason) => {
                debug!(%intent, %reason, "Intent ignored");
                self.notice = Some(reason.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Player, Square, Status};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Control::Continue);
        }
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.game().current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_digit_plays_cell_from_any_focus() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Tab, KeyCode::Char('9')]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(
            app.game().current_board().get(Position::BottomRight),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_occupied_cell_sets_notice() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.notice(), Some("Square Center is already occupied"));

        press(&mut app, &[KeyCode::Char('1')]);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_move_list_jump() {
        let mut app = App::new(true);
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('5'),
                KeyCode::Char('9'),
                KeyCode::Tab,
            ],
        );
        assert_eq!(app.selected(), 3);

        press(&mut app, &[KeyCode::Home, KeyCode::Enter]);
        assert_eq!(app.game().current_step(), 0);
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.game().status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_bracket_keys_step_through_history() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2')]);

        press(&mut app, &[KeyCode::Char('['), KeyCode::Char('[')]);
        assert_eq!(app.game().current_step(), 0);
        press(&mut app, &[KeyCode::Char('[')]);
        assert_eq!(app.game().current_step(), 0);

        press(&mut app, &[KeyCode::Char(']'), KeyCode::Char(']'), KeyCode::Char(']')]);
        assert_eq!(app.game().current_step(), 2);
        assert!(app.notice().is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(true);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }
}

//! Keyboard navigation for the board and the move list.

use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Moves the move-list selection; `len` is the number of entries.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    let last = len.saturating_sub(1);
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down => (selected + 1).min(last),
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => selected.min(last),
    }
}

/// Maps digit keys 1-9 to board indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

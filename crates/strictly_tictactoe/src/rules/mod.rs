//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from history bookkeeping so contracts and the UI can share them.

pub mod win;

pub use win::{winner, winning_line, LINES};

//! Status line derived from the displayed board.

use super::Player;
use serde::{Deserialize, Serialize};

/// What the status line reports.
///
/// There is no draw: a full board without a line still names the player
/// who would move next.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The game is open for this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// The winner, if the status reports one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::NextPlayer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(Status::NextPlayer(Player::X).to_string(), "Next player: X");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }
}

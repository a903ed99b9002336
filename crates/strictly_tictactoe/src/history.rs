//! Board snapshots recorded after each move.

use super::invariants::InvalidGameState;
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One recorded board, the state of the game after some number of moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Board after the move.
    pub(crate) board: Board,
}

impl HistoryEntry {
    /// Wraps a board snapshot.
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

/// Ordered board snapshots indexed by move number.
///
/// Entry 0 is always the empty board. A new entry is only ever added on
/// top of a chosen step, dropping whatever followed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameHistory")]
pub struct GameHistory {
    pub(crate) entries: Vec<HistoryEntry>,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RawGameHistory {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<RawGameHistory> for GameHistory {
    type Error = InvalidGameState;

    fn try_from(raw: RawGameHistory) -> Result<Self, Self::Error> {
        match raw.entries.first() {
            None => Err(InvalidGameState::new("History has no entries")),
            Some(entry) if *entry.board() != Board::new() => Err(InvalidGameState::new(
                "History does not start with the empty board",
            )),
            Some(_) => Ok(Self {
                entries: raw.entries,
            }),
        }
    }
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Board::new())],
        }
    }

    /// Number of recorded snapshots (moves played + 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the empty board is recorded from the start.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in move order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The entry at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// The move that produced the entry at `step`.
    ///
    /// Returns `None` for step 0 and for steps that were not recorded.
    pub fn move_at(&self, step: usize) -> Option<(Player, Position)> {
        if step == 0 {
            return None;
        }
        let before = self.entries.get(step - 1)?.board();
        let after = self.entries.get(step)?.board();
        let pos = before.diff(after).into_iter().next()?;
        after.get(pos).player().map(|player| (player, pos))
    }

    /// Keeps entries `0..=step`, then records `board` after them.
    ///
    /// Returns the index of the new entry.
    #[instrument(skip(self, board), fields(len = self.entries.len()))]
    pub(crate) fn branch(&mut self, step: usize, board: Board) -> usize {
        let discarded = self.entries.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future moves");
        }
        self.entries.truncate(step + 1);
        self.entries.push(HistoryEntry::new(board));
        self.entries.len() - 1
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

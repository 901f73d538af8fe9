//! Move history with branch-on-rewind semantics.

use crate::{Board, Move, MoveLocation};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// The move, absent for the initial entry.
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Creates an entry for a board reached by `mv`.
    pub fn new(board: Board, mv: Move) -> Self {
        Self {
            board,
            last_move: Some(mv),
        }
    }

    /// Where the move was played, absent for the initial entry.
    pub fn location(&self) -> Option<MoveLocation> {
        self.last_move.map(|mv| mv.location())
    }
}

/// Ordered snapshots, starting with the empty board.
///
/// Never empty. Entries are only appended through [`GameHistory::branch`],
/// which first discards everything after the branch point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
}

impl GameHistory {
    /// Creates a history holding only the initial entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Returns the most recent entry.
    pub fn latest(&self) -> &HistoryEntry {
        // entries always holds the initial entry
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in play order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Keeps entries `0..=step`, then appends `entry`.
    ///
    /// Returns the step of the appended entry.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub fn branch(&mut self, step: usize, entry: HistoryEntry) -> usize {
        let keep = (step + 1).min(self.entries.len());
        if keep < self.entries.len() {
            debug!(
                discarded = self.entries.len() - keep,
                "Discarding entries after branch point"
            );
        }
        self.entries.truncate(keep);
        self.entries.push(entry);
        self.entries.len() - 1
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

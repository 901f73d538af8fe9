//! Board positions and their row/column locations.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// 1-based row and column of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Getters, Serialize, Deserialize)]
#[display("({}, {})", row, column)]
pub struct MoveLocation {
    /// Row, 1 at the top.
    row: u8,
    /// Column, 1 at the left.
    column: u8,
}

impl MoveLocation {
    /// Creates a location from 1-based row and column.
    pub fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }
}

/// Column lookup keyed by `index % 3`.
const COLUMNS: [u8; 3] = [1, 2, 3];

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the 1-based row of this position.
    pub fn row(self) -> u8 {
        match self.to_index() {
            0..=2 => 1,
            3..=5 => 2,
            _ => 3,
        }
    }

    /// Returns the 1-based column of this position.
    pub fn column(self) -> u8 {
        COLUMNS[self.to_index() % 3]
    }

    /// Returns the (row, column) location of this position.
    #[instrument]
    pub fn location(self) -> MoveLocation {
        MoveLocation::new(self.row(), self.column())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

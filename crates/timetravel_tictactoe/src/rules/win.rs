//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who owns it and where it lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of all three squares.
    player: Player,
    /// The three positions, in line order.
    positions: [Position; 3],
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first completed one is
/// returned, even if the board holds more than one.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    player,
                    positions: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

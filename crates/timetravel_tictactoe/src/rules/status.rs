//! Derived game status.

use super::{WinningLine, check_winner, is_full};
use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a board, recomputed on demand.
///
/// Nothing stores this; it is always derived from the displayed board so it
/// can never go stale after a jump through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress,
    /// A line has been completed.
    Won(WinningLine),
    /// The board is full and nobody won.
    Draw,
}

impl GameStatus {
    /// Evaluates a board.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board) -> Self {
        if let Some(line) = check_winner(board) {
            GameStatus::Won(line)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the winning positions, empty unless won.
    pub fn winning_positions(&self) -> &[Position] {
        match self {
            GameStatus::Won(line) => line.positions().as_slice(),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(GameStatus::evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        #[rustfmt::skip]
        let marks = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::X,
            Player::O, Player::X, Player::O,
        ];
        let board = Position::ALL
            .into_iter()
            .zip(marks)
            .fold(Board::new(), |board, (pos, player)| board.with_mark(pos, player));

        let status = GameStatus::evaluate(&board);
        assert_eq!(status, GameStatus::Draw);
        assert!(status.winning_positions().is_empty());
    }

    #[test]
    fn test_full_board_with_line_is_won() {
        // X X X / O O X / X O O
        #[rustfmt::skip]
        let marks = [
            Player::X, Player::X, Player::X,
            Player::O, Player::O, Player::X,
            Player::X, Player::O, Player::O,
        ];
        let board = Position::ALL
            .into_iter()
            .zip(marks)
            .fold(Board::new(), |board, (pos, player)| board.with_mark(pos, player));

        let status = GameStatus::evaluate(&board);
        assert!(matches!(status, GameStatus::Won(line) if *line.player() == Player::X));
        assert_eq!(
            status.winning_positions(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}

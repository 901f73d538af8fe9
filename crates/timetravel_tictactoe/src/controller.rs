//! Game state controller with time travel.
//!
//! [`TimeTravelGame`] owns the full move history and a step pointer selecting
//! which snapshot is displayed. Moves are always made against the displayed
//! snapshot; making a move after stepping back discards the entries past the
//! pointer and starts a new branch.

use crate::{
    Board, GameHistory, GameStatus, HistoryEntry, Move, MoveOrder, Player, Position, StepError,
    check_winner,
};
use tracing::{debug, info, instrument};

/// What a cell click did.
///
/// Rejected clicks leave the game untouched; the UI treats them as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A mark was placed.
    Placed(Move),
    /// The index is not a board position.
    OutOfBounds,
    /// The square is already taken on the displayed board.
    Occupied(Position),
    /// The displayed board already has a winner.
    AlreadyWon(Player),
}

impl ClickOutcome {
    /// Returns true if the click placed a mark.
    pub fn is_placed(&self) -> bool {
        matches!(self, ClickOutcome::Placed(_))
    }
}

/// Tic-tac-toe game with history and a movable step pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTravelGame {
    history: GameHistory,
    step: usize,
    move_order: MoveOrder,
}

impl TimeTravelGame {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_move_order(MoveOrder::default())
    }

    /// Creates a new game with the given move list order.
    #[instrument]
    pub fn with_move_order(move_order: MoveOrder) -> Self {
        Self {
            history: GameHistory::new(),
            step: 0,
            move_order,
        }
    }

    /// Returns the full history, including entries past the step pointer.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Returns the displayed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the move list order.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// Returns the displayed history entry.
    pub fn current_entry(&self) -> &HistoryEntry {
        // step < history.len() is kept by every mutator
        self.history.get(self.step).unwrap_or_else(|| self.history.latest())
    }

    /// Returns the displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Returns the player who moves next from the displayed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Evaluates the displayed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board())
    }

    /// Handles a click on the cell at `index` (0-8) of the displayed board.
    ///
    /// Clicks on occupied cells, on a decided board, or outside the board are
    /// ignored. A valid click truncates history to the displayed step, appends
    /// the new snapshot and advances the pointer to it.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn handle_cell_click(&mut self, index: usize) -> ClickOutcome {
        let Some(position) = Position::from_index(index) else {
            debug!("Ignoring click outside the board");
            return ClickOutcome::OutOfBounds;
        };

        let board = *self.current_board();
        if !board.is_empty(position) {
            debug!(%position, "Ignoring click on occupied square");
            return ClickOutcome::Occupied(position);
        }
        if let Some(line) = check_winner(&board) {
            debug!(winner = %line.player(), "Ignoring click on decided board");
            return ClickOutcome::AlreadyWon(*line.player());
        }

        let player = self.next_player();
        let mv = Move::new(player, position);
        let entry = HistoryEntry::new(board.with_mark(position, player), mv);
        self.step = self.history.branch(self.step, entry);

        info!(%mv, location = %mv.location(), step = self.step, "Move placed");
        debug!(board = %self.current_board().display(), "Board after move");
        ClickOutcome::Placed(mv)
    }

    /// Displays the snapshot at `step`.
    ///
    /// Selecting the displayed step is a no-op. History is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] if `step` is past the end of the
    /// history; the game is left unchanged.
    #[instrument(skip(self), fields(current = self.step))]
    pub fn jump_to_step(&mut self, step: usize) -> Result<(), StepError> {
        if step == self.step {
            return Ok(());
        }
        if step >= self.history.len() {
            return Err(StepError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!(next_player = %self.next_player(), "Jumped to step");
        Ok(())
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.move_order = self.move_order.toggle();
        debug!(move_order = ?self.move_order, "Move order toggled");
    }

    /// Discards all history and returns to the empty board.
    ///
    /// The move list order is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!(discarded = self.history.len() - 1, "Starting new game");
        self.history = GameHistory::new();
        self.step = 0;
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}

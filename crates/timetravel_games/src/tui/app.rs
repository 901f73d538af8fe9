//! Application state and logic.

use timetravel_tictactoe::{ClickOutcome, MoveOrder, Position, TimeTravelGame, move_list};
use tracing::{debug, instrument, warn};

use super::input::{Action, Focus, move_cursor};

/// Main application state.
///
/// Owns the game exclusively; every input is turned into an [`Action`] and
/// applied here.
#[derive(Debug, Clone)]
pub struct App {
    game: TimeTravelGame,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(move_order: MoveOrder) -> Self {
        Self {
            game: TimeTravelGame::with_move_order(move_order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &TimeTravelGame {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the history step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies an action.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ClickCell(index) => self.click(index),
            Action::PlaceAtCursor => self.click(self.cursor.to_index()),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::SelectPrevRow => self.shift_selection(-1),
            Action::SelectNextRow => self.shift_selection(1),
            Action::JumpToSelected => self.jump(self.selected_step),
            Action::JumpTo(step) => self.jump(step),
            Action::StepBack => {
                if let Some(step) = self.game.step().checked_sub(1) {
                    self.jump(step);
                }
            }
            Action::StepForward => {
                let step = self.game.step() + 1;
                if step < self.game.history().len() {
                    self.jump(step);
                }
            }
            Action::JumpStart => self.jump(0),
            Action::JumpLatest => self.jump(self.game.history().len() - 1),
            Action::ToggleOrder => self.game.toggle_move_order(),
            Action::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.selected_step = self.game.step();
            }
            Action::NewGame => {
                self.game.new_game();
                self.selected_step = 0;
            }
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn click(&mut self, index: usize) {
        match self.game.handle_cell_click(index) {
            ClickOutcome::Placed(mv) => {
                self.cursor = mv.position();
                self.selected_step = self.game.step();
            }
            outcome => debug!(?outcome, index, "Click ignored"),
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to_step(step) {
            Ok(()) => self.selected_step = self.game.step(),
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Moves the move-list selection by `delta` rows in display order.
    fn shift_selection(&mut self, delta: isize) {
        let rows = move_list(&self.game);
        let current = rows
            .iter()
            .position(|row| *row.step() == self.selected_step)
            .unwrap_or(0);
        let target = current
            .saturating_add_signed(delta)
            .min(rows.len().saturating_sub(1));
        if let Some(row) = rows.get(target) {
            self.selected_step = *row.step();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MoveOrder::default())
    }
}

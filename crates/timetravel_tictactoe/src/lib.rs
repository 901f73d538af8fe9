//! Tic-tac-toe with move history and time travel.
//!
//! Pure game logic, independent of any front end:
//!
//! - **Rules**: win and draw evaluation over a [`Board`]
//! - **History**: immutable board snapshots with branch-on-rewind
//! - **Controller**: [`TimeTravelGame`] handling clicks, jumps and ordering
//! - **Presentation**: derived move list and status line
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{TimeTravelGame, status_line};
//!
//! let mut game = TimeTravelGame::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.handle_cell_click(index);
//! }
//! assert_eq!(status_line(&game), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod error;
mod history;
mod position;
mod presentation;
pub mod rules;
mod types;

pub use action::Move;
pub use controller::{ClickOutcome, TimeTravelGame};
pub use error::StepError;
pub use history::{GameHistory, HistoryEntry};
pub use position::{MoveLocation, Position};
pub use presentation::{MoveListItem, move_label, move_list, status_line};
pub use rules::{GameStatus, LINES, WinningLine, check_winner, is_full};
pub use types::{Board, MoveOrder, Player, Square};

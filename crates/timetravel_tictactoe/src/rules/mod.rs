//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here stores game
//! state; callers re-evaluate the displayed board whenever they need to know
//! whether the game is decided.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use status::GameStatus;
pub use win::{LINES, WinningLine, check_winner};

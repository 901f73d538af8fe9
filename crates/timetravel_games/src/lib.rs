//! Time Travel Tic-Tac-Toe - terminal front end
//!
//! Hosts the [`timetravel_tictactoe`] game in a ratatui terminal UI.
//!
//! # Architecture
//!
//! - **App**: owns the game and applies user [`Action`]s
//! - **Input**: key presses and mouse clicks become [`Action`]s
//! - **UI**: stateless rendering that reports clickable regions
//! - **Config**: TOML settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use tui::app::App;
pub use tui::input::{Action, Focus, key_action, move_cursor};
pub use tui::ui::{HitMap, draw};
pub use tui::{init_tracing, run_tui};

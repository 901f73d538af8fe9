//! Command-line interface for timetravel_games.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use timetravel_tictactoe::MoveOrder;
use tracing::instrument;

/// Time Travel Tic-Tac-Toe - play in the terminal and rewind any move
#[derive(Parser, Debug)]
#[command(name = "timetravel_games")]
#[command(about = "Tic-tac-toe with move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Show the move list latest-first
    #[arg(long)]
    pub descending: bool,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TuiConfig::from_file(path)?,
            None => TuiConfig::default(),
        };

        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if self.descending {
            config = config.with_move_order(MoveOrder::Descending);
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        Ok(config)
    }
}

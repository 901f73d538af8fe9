//! Time Travel Tic-Tac-Toe - terminal entry point

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use timetravel_games::{Cli, run_tui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    run_tui(config).await
}

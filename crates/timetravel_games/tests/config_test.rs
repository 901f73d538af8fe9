//! Tests for config loading and command-line overrides.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use timetravel_games::{Cli, TuiConfig};
use timetravel_tictactoe::MoveOrder;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = TuiConfig::default();
    assert_eq!(config.log_file(), &PathBuf::from("timetravel_games.log"));
    assert_eq!(*config.move_order(), MoveOrder::Ascending);
    assert!(*config.mouse());
    assert_eq!(*config.tick_rate_ms(), 100);
}

#[test]
fn test_missing_keys_take_defaults() {
    let file = write_config("move_order = \"descending\"\n");
    let config = TuiConfig::from_file(file.path()).expect("valid config");

    assert_eq!(*config.move_order(), MoveOrder::Descending);
    assert!(*config.mouse());
    assert_eq!(*config.tick_rate_ms(), 100);
}

#[test]
fn test_full_config() {
    let file = write_config(
        "log_file = \"/tmp/ttt.log\"\nmove_order = \"ascending\"\nmouse = false\ntick_rate_ms = 250\n",
    );
    let config = TuiConfig::from_file(file.path()).expect("valid config");

    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert!(!*config.mouse());
    assert_eq!(*config.tick_rate_ms(), 250);
}

#[test]
fn test_bad_config_is_an_error() {
    let file = write_config("move_order = \"sideways\"\n");
    let err = TuiConfig::from_file(file.path()).expect_err("invalid order");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = TuiConfig::from_file("/nonexistent/timetravel.toml").expect_err("no such file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("move_order = \"ascending\"\nmouse = true\n");
    let path = file.path().to_string_lossy().to_string();
    let cli = Cli::parse_from([
        "timetravel_games",
        "--config",
        path.as_str(),
        "--descending",
        "--no-mouse",
        "--log-file",
        "override.log",
    ]);

    let config = cli.resolve_config().expect("valid config");
    assert_eq!(*config.move_order(), MoveOrder::Descending);
    assert!(!*config.mouse());
    assert_eq!(config.log_file(), &PathBuf::from("override.log"));
}

#[test]
fn test_cli_without_config_uses_defaults() {
    let cli = Cli::parse_from(["timetravel_games"]);
    assert_eq!(cli.resolve_config().expect("defaults"), TuiConfig::default());
}

//! Tests for loading the TOML config file.

use std::io::Write;
use strictly_tictactoe::{GameConfig, HistoryOrder};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "history_order = \"descending\"\nlog_file = \"game.log\"\nlog_filter = \"debug\""
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.history_order(), &HistoryOrder::Descending);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_an_error_for_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "history_order = [").unwrap();

    let err = GameConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

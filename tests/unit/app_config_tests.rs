/*!
 * Tests for app configuration loading and validation
 */

use std::fs;

use polymsg::app_config::{Config, DatabaseLocation, LogLevel};
use tempfile::TempDir;

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefault() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.database.location(), DatabaseLocation::Default);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["database"]["busy_timeout_ms"], 5000);
    assert_eq!(written["log_level"], "info");
}

#[test]
fn test_loadOrCreate_withExistingFile_shouldParseIt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    fs::write(
        &path,
        r#"{"database": {"path": ":memory:", "busy_timeout_ms": 250}, "log_level": "trace"}"#,
    )
    .unwrap();

    let config = Config::load_or_create(&path).unwrap();

    assert_eq!(config.database.location(), DatabaseLocation::InMemory);
    assert_eq!(config.database.busy_timeout_ms, 250);
    assert_eq!(config.log_level, LogLevel::Trace);
    assert!(config.validate().is_ok());
}

#[test]
fn test_loadOrCreate_withMalformedFile_shouldFail() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Config::load_or_create(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_save_thenLoad_shouldPreserveValues() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.json");

    let mut config = Config::default();
    config.database.path = Some(dir.path().join("messages.db").display().to_string());
    config.log_level = LogLevel::Warn;
    config.save(&path).unwrap();

    let loaded = Config::load_or_create(&path).unwrap();
    assert_eq!(loaded.database.path, config.database.path);
    assert_eq!(loaded.log_level, LogLevel::Warn);
}

#[test]
fn test_validate_withZeroTimeout_shouldFail() {
    let mut config = Config::default();
    config.database.busy_timeout_ms = 0;
    assert!(config.validate().is_err());
}

//! Tests for loading console configuration from disk.

use parlor::{ConsoleConfig, DropInput};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "log_filter = \"debug\"\ndrop_input = \"column_only\"").unwrap();

    let config = ConsoleConfig::load(Some(file.path())).expect("Config loads");
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(*config.drop_input(), DropInput::ColumnOnly);
    assert!(*config.show_available_moves());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = ConsoleConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_no_path_uses_defaults() {
    assert_eq!(ConsoleConfig::load(None).unwrap(), ConsoleConfig::default());
}

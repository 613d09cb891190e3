//! Console configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

/// How connect four moves are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropInput {
    /// Column letter plus row digit (`a1`); the row is checked against gravity.
    #[default]
    ExplicitRow,
    /// Column letter only (`a`); the landing row is computed.
    ColumnOnly,
}

/// Settings for the interactive console.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// List the landing cells before each connect four prompt.
    #[serde(default = "default_show_available_moves")]
    show_available_moves: bool,

    /// Connect four input contract.
    #[serde(default)]
    drop_input: DropInput,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_available_moves() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_available_moves: default_show_available_moves(),
            drop_input: DropInput::default(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns a copy with a different connect four input contract.
    pub fn with_drop_input(mut self, drop_input: DropInput) -> Self {
        self.drop_input = drop_input;
        self
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.log_filter(), "warn");
        assert!(*config.show_available_moves());
        assert_eq!(*config.drop_input(), DropInput::ExplicitRow);
    }

    #[test]
    fn test_column_only_mode() {
        let config = ConsoleConfig::from_toml(
            r#"
            drop_input = "column_only"
            show_available_moves = false
            "#,
        )
        .unwrap();
        assert_eq!(*config.drop_input(), DropInput::ColumnOnly);
        assert!(!*config.show_available_moves());
    }

    #[test]
    fn test_unknown_drop_input_rejected() {
        let err = ConsoleConfig::from_toml(r#"drop_input = "sideways""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}

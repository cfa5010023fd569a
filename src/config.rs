//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Which front-end drives the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    /// Line-oriented console play.
    #[default]
    #[display("console")]
    Console,
    /// Full-screen terminal board.
    #[display("tui")]
    Tui,
}

/// Settings loaded from a TOML file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Front-end used when no command is given.
    #[serde(default)]
    frontend: Frontend,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Log destination for the TUI, which owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Print the derived win shapes before a console game starts.
    #[serde(default)]
    show_patterns_on_start: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_ttt_tui.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frontend: Frontend::default(),
            log_filter: default_log_filter(),
            log_file: default_log_file(),
            show_patterns_on_start: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(frontend = %config.frontend, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml("frontend = \"tui\"\nlog_filter = \"debug\"").unwrap();
        assert_eq!(*config.frontend(), Frontend::Tui);
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.log_file(), &default_log_file());
    }

    #[test]
    fn test_bad_frontend_is_error() {
        let err = AppConfig::from_toml("frontend = \"gtk\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_patterns_on_start = true").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert!(*config.show_patterns_on_start());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = AppConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}

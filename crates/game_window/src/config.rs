//! Window configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::GameWindow`].
///
/// Every field has a sensible default, so a missing or partial TOML file is
/// fine; unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title used by [`crate::GameWindow::open_default`].
    pub title: String,

    /// Interval between close-request polls, in milliseconds.
    ///
    /// The default of 16 ms approximates 60 Hz. Close detection lags a user's
    /// click by at most one interval.
    pub poll_interval_ms: u64,

    /// Explicit path to the native library. When unset, `libwindow` is
    /// resolved through the platform's normal library search path.
    pub library_path: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Game Window".to_string(),
            poll_interval_ms: 16,
            library_path: None,
        }
    }
}

impl WindowConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&contents)
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// The poll interval as a [`Duration`].
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Game Window");
        assert_eq!(config.poll_interval(), Duration::from_millis(16));
        assert!(config.library_path.is_none());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = WindowConfig::from_toml("title = \"Asteroids\"").unwrap();
        assert_eq!(config.title, "Asteroids");
        assert_eq!(config.poll_interval_ms, 16);
    }

    #[test]
    fn test_full_toml() {
        let config = WindowConfig::from_toml(
            "title = \"Asteroids\"\npoll_interval_ms = 8\nlibrary_path = \"/opt/libwindow.so\"\n",
        )
        .unwrap();
        assert_eq!(config.poll_interval_ms, 8);
        assert_eq!(config.library_path.as_deref(), Some("/opt/libwindow.so".as_ref()));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result = WindowConfig::from_toml("poll_interval_ms = \"fast\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

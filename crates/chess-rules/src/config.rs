//! Rules configuration loaded from TOML.
//!
//! ```toml
//! fifty_move_rule = true
//! threefold_repetition = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read rules config: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse rules config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which history-based draws a [`Game`](crate::Game) applies after each move.
///
/// Every field defaults to enabled, so an empty file gives standard rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Draw after 100 half-moves without a pawn move or capture.
    pub fifty_move_rule: bool,
    /// Draw when a placement occurs for the third time.
    pub threefold_repetition: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            fifty_move_rule: true,
            threefold_repetition: true,
        }
    }
}

impl RulesConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it is not valid TOML for this type.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "rules config not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config, RulesConfig::default());
        assert!(config.fifty_move_rule);
        assert!(config.threefold_repetition);
    }

    #[test]
    fn partial_config() {
        let config = RulesConfig::from_toml_str("threefold_repetition = false").unwrap();
        assert!(config.fifty_move_rule);
        assert!(!config.threefold_repetition);
    }

    #[test]
    fn invalid_toml() {
        let result = RulesConfig::from_toml_str("fifty_move_rule = \"sometimes\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = RulesConfig::load("/nonexistent/rules.toml").unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("chess-rules-{}.toml", std::process::id()));
        std::fs::write(&path, "fifty_move_rule = false\n").unwrap();
        let config = RulesConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert!(!config.fifty_move_rule);
        assert!(config.threefold_repetition);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = RulesConfig {
            fifty_move_rule: false,
            threefold_repetition: true,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(RulesConfig::from_toml_str(&text).unwrap(), config);
    }
}

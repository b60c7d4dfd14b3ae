//! Game configuration loaded from TOML.

use crate::games::tictactoe::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which side opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human (O) moves first.
    #[default]
    Human,
    /// The engine (X) moves first.
    Engine,
}

impl FirstPlayer {
    /// Mark of the opening side.
    pub fn mark(self) -> Mark {
        match self {
            FirstPlayer::Human => Mark::O,
            FirstPlayer::Engine => Mark::X,
        }
    }
}

/// Configuration for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side that opens the game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Display name of the human player.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Display name of the engine.
    #[serde(default = "default_engine_name")]
    engine_name: String,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_name() -> String {
    "Human".to_string()
}

fn default_engine_name() -> String {
    "Engine".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            human_name: default_human_name(),
            engine_name: default_engine_name(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(first_player = ?config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with the engine opening the game.
    pub fn with_engine_first(mut self) -> Self {
        self.first_player = FirstPlayer::Engine;
        self
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

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.first_player().mark(), Mark::O);
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml("first_player = \"engine\"\nhuman_name = \"Ada\"").unwrap();
        assert_eq!(*config.first_player(), FirstPlayer::Engine);
        assert_eq!(config.human_name(), "Ada");
        assert_eq!(config.engine_name(), "Engine");
    }

    #[test]
    fn test_unknown_first_player_rejected() {
        let err = GameConfig::from_toml("first_player = \"nobody\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}

//! Game configuration loaded from TOML.

use super::render::Roster;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game session.
///
/// Every field is optional in the file; missing ones take the defaults.
///
/// ```toml
/// player_x_name = "Alice (X)"
/// player_o_name = "Computer (O)"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name for the X player.
    #[serde(default = "default_player_x_name")]
    player_x_name: String,

    /// Display name for the O player.
    #[serde(default = "default_player_o_name")]
    player_o_name: String,

    /// Seed for the random number generator; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Rejection samples the computer tries before choosing among empty squares.
    #[serde(default = "default_max_random_attempts")]
    max_random_attempts: usize,
}

fn default_player_x_name() -> String {
    "Player 1 (X)".to_string()
}

fn default_player_o_name() -> String {
    "Player 2 (O)".to_string()
}

fn default_max_random_attempts() -> usize {
    9
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x_name: default_player_x_name(),
            player_o_name: default_player_o_name(),
            seed: None,
            max_random_attempts: default_max_random_attempts(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Marker display names.
    pub fn roster(&self) -> Roster {
        Roster::new(self.player_x_name.clone(), self.player_o_name.clone())
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

use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest board dimension the terminal view lays out comfortably.
pub const MAX_DIMENSION: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Colors prefilled on the setup screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first_color: String,
    pub second_color: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first_color: "red".to_string(),
            second_color: "yellow".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.board.width) {
            return Err(ConfigError::Validation(format!(
                "board.width must be in 1..={MAX_DIMENSION}"
            )));
        }
        if !(1..=MAX_DIMENSION).contains(&self.board.height) {
            return Err(ConfigError::Validation(format!(
                "board.height must be in 1..={MAX_DIMENSION}"
            )));
        }
        validate_colors(&self.players.first_color, &self.players.second_color)
            .map_err(ConfigError::Validation)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

/// Both colors must be present and tell the players apart. Shared with the
/// setup screen so the form and the config file agree.
pub fn validate_colors(first: &str, second: &str) -> Result<(), String> {
    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() {
        return Err("player colors must not be empty".to_string());
    }
    if first.eq_ignore_ascii_case(second) {
        return Err("players must pick different colors".to_string());
    }
    Ok(())
}

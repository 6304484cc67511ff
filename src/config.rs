//! Runtime configuration.
//!
//! Everything has a default; an optional TOML file overrides any subset of
//! the fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entities::BannerMode;
use crate::error::ConfigError;

/// File looked up in the working directory by the binary.
pub const CONFIG_FILE: &str = "space_explorer.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play area width in pixels.
    pub screen_width: i32,
    /// Play area height in pixels.
    pub screen_height: i32,
    /// Simulation ticks per second.
    pub fps: u32,
    pub save_path: PathBuf,
    pub banner_mode: BannerMode,
    /// Ring the terminal bell for loud cues. Off means cues are only logged.
    pub terminal_bell: bool,
    /// Where `env_logger` output goes while the terminal is in raw mode.
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            fps: 60,
            save_path: PathBuf::from("savegame.json"),
            banner_mode: BannerMode::Freeze,
            terminal_bell: true,
            log_path: PathBuf::from("space_explorer.log"),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file is not an error and yields defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::Invalid {
                field: "fps",
                reason: "must be at least 1".to_string(),
            });
        }
        // The boss sprite is the widest entity; anything narrower breaks spawning.
        if self.screen_width < 100 || self.screen_height < 100 {
            return Err(ConfigError::Invalid {
                field: "screen_width/screen_height",
                reason: format!(
                    "{}x{} is smaller than 100x100",
                    self.screen_width, self.screen_height
                ),
            });
        }
        Ok(())
    }
}

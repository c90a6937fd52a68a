//! Configuration file handling.
//!
//! The only tunable is where the secret is persisted. A JSON file can set it,
//! and the command line overrides the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GameError, Result};
use crate::store::DEFAULT_STATE_FILE;

/// Game configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// File holding the persisted secret
    pub state_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}

impl GameConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Build the effective configuration: an optional config file, then an
    /// optional state file override on top of it.
    pub fn resolve(config_path: Option<&Path>, state_file: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        if let Some(state_file) = state_file {
            config.state_file = state_file;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.state_file.as_os_str().is_empty() {
            return Err(GameError::config("State file path must not be empty"));
        }
        Ok(())
    }
}

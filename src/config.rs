//! Tracker configuration
//!
//! Stored in `~/.config/keystate/config.yaml`:
//!
//! ```yaml
//! suppress_default_behavior: false
//! watch: [arrowLeft, arrowRight, space]
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::keycodes::KeyCodeRegistry;

/// Options for a `KeyTracker` and the keys the viewer polls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Cancel the host's default handling of every key event the tracker sees
    #[serde(default)]
    pub suppress_default_behavior: bool,

    /// Key names polled each frame by the viewer
    #[serde(default = "default_watch")]
    pub watch: Vec<String>,
}

fn default_watch() -> Vec<String> {
    ["arrowLeft", "arrowRight", "arrowUp", "arrowDown", "space"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            suppress_default_behavior: false,
            watch: default_watch(),
        }
    }
}

impl TrackerConfig {
    /// Load config from the user config dir, or return defaults if missing
    /// or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse config from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Write config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Watched names that are not in the key-code table
    pub fn unknown_keys(&self) -> Vec<&str> {
        let registry = KeyCodeRegistry::global();
        self.watch
            .iter()
            .map(String::as_str)
            .filter(|name| !registry.contains(name))
            .collect()
    }
}

/// Errors that can occur when reading or writing config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

//! User configuration
//!
//! Loaded from `~/.config/qterm/config.toml` (or the platform equivalent).
//! A missing file means defaults; a malformed file is a real error. The
//! config covers presentation knobs only: theme, latency window, boot delay,
//! prompt identity and an optional custom profile.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::delay::UniformWindow;
use crate::shell::{Profile, ProfileError};
use crate::theme::Theme;

/// Errors raised while loading or saving the config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Simulated-latency window in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Latency {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            min_ms: UniformWindow::DEFAULT_MIN_MS,
            max_ms: UniformWindow::DEFAULT_MAX_MS,
        }
    }
}

/// Prompt identity rendered as `user@host:path $`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub user: String,
    pub host: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            user: "cyber_user".to_string(),
            host: "quantum".to_string(),
        }
    }
}

/// Top-level qterm configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name: "cyber", "classic" or "ocean".
    pub theme: String,
    /// Boot-banner delay in milliseconds.
    pub boot_ms: u64,
    /// Path to a custom profile TOML; unset means the built-in CYBER2070.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<PathBuf>,
    pub latency: Latency,
    pub identity: Identity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "cyber".to_string(),
            boot_ms: 400,
            profile_path: None,
            latency: Latency::default(),
            identity: Identity::default(),
        }
    }
}

impl Config {
    /// Platform config file path: `<config_dir>/qterm/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("qterm").join("config.toml"))
    }

    /// Load from the default location; missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write this config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Pretty TOML rendering of this config.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The latency provider this config describes.
    pub fn delay_source(&self) -> UniformWindow {
        UniformWindow::from_millis(self.latency.min_ms, self.latency.max_ms)
    }

    pub fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.boot_ms)
    }

    /// Resolve the theme name to a palette; unknown names fall back to cyber.
    pub fn resolve_theme(&self) -> Theme {
        Theme::by_name(&self.theme)
    }

    /// Load the configured profile, or the built-in one if none is set.
    pub fn load_profile(&self) -> Result<Profile, ConfigError> {
        match &self.profile_path {
            Some(path) => Ok(Profile::load(path)?),
            None => Ok(Profile::cyber2070()),
        }
    }
}

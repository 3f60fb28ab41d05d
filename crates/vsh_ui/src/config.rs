//! Configuration for the interactive terminal layer.
//!
//! Settings load from `config.toml` under the platform configuration
//! directory and fall back to the defaults when the file is absent or
//! unreadable. Every field is optional in the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

/// Interactive session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Banner printed once at startup; empty suppresses it.
    pub greeting: String,

    /// Appended to the working-directory path to form the prompt.
    pub prompt_suffix: String,

    /// Persist readline history across sessions.
    pub save_history: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            greeting: "Welcome to the VirtuShell terminal tutorial".to_string(),
            prompt_suffix: " $ ".to_string(),
            save_history: true,
        }
    }
}

impl UiConfig {
    /// Default configuration file path, when the platform has one.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vsh").join("config.toml"))
    }

    /// History file path, kept next to the configuration.
    pub fn history_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vsh").join("history.txt"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file is not an error; an unreadable or malformed one is
    /// logged and ignored, so a bad edit never locks the user out.
    pub fn load() -> Self {
        let Some(path) = Self::default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring config file {}: {err:#}", path.display());
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse TOML config file")
    }
}

// src/config/mod.rs
//! User configuration, loaded as TOML from the platform config directory
//! using the [`directories`](https://docs.rs/directories) crate.

use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BrowserError;

/// User-editable settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the browser starts in. Falls back to the process working
    /// directory when unset.
    pub start_dir: Option<PathBuf>,
}

impl Config {
    /// Platform config file location, e.g. `~/.config/burrow/config.toml`
    /// on Linux.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "burrow").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the config, defaulting when no file exists yet.
    pub fn load() -> Result<Self, BrowserError> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(raw) => {
                let config: Self = toml::from_str(&raw)?;
                info!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(BrowserError::ConfigIo { path, source }),
        }
    }
}

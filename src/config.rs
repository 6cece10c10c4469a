//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsproc/rsproc.toml`
//! 3. Local config: `./.rsproc.toml`

use std::path::{Path, PathBuf};

use config::{Config, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Unified configuration for rsproc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Fallback name for the hello command
    pub default_name: String,
    /// Colored terminal output (NO_COLOR and CLICOLOR still apply on top)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_name: "World".into(),
            color: true,
        }
    }
}

/// Get the XDG config directory for rsproc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsproc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rsproc.toml"))
}

/// Get the path to the local config file in a working directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".rsproc.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `local_dir` is the directory searched for `.rsproc.toml` (default:
    /// current working directory). Scalars use replace semantics: the
    /// highest layer that sets a field wins.
    pub fn load(local_dir: Option<&Path>) -> AppResult<Self> {
        let mut builder = Config::builder();

        if let Some(global) = global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }

        let local = local_config_path(local_dir.unwrap_or(Path::new(".")));
        builder = builder.add_source(File::from(local).required(false));

        let merged = builder.build().map_err(|e| AppError::Config {
            message: e.to_string(),
        })?;

        merged.try_deserialize().map_err(|e| AppError::Config {
            message: e.to_string(),
        })
    }
}

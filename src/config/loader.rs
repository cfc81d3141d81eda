//! Configuration file loading.
//!
//! Settings live in an optional TOML file, by default at
//! `~/.config/heapviz/config.toml`. A missing default file falls back to
//! hardcoded defaults; a missing explicitly requested file is an error.

use crate::config::EngineConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file at {}: {reason}", .path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown settings.
    #[error("invalid TOML in {}: {reason}", .path.display())]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// Every field is optional; unset fields keep their hardcoded defaults.
///
/// ```toml
/// step_delay_ms = 250
/// history_depth = 64
/// log_file = "/tmp/heapviz.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Pause between narrated query steps, in milliseconds.
    #[serde(default)]
    pub step_delay_ms: Option<u64>,

    /// Maximum retained undo snapshots.
    #[serde(default)]
    pub history_depth: Option<usize>,

    /// Path to the tracing log file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl ConfigFile {
    /// Overlay this file's settings onto the hardcoded defaults.
    pub fn into_config(self) -> EngineConfig {
        let defaults = EngineConfig::default();
        EngineConfig {
            step_delay: self
                .step_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.step_delay),
            history_depth: self.history_depth.or(defaults.history_depth),
            log_file: self.log_file.or(defaults.log_file),
        }
    }
}

/// Default config file location (`~/.config/heapviz/config.toml`).
///
/// `None` when the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("heapviz").join("config.toml"))
}

/// Load configuration, preferring `explicit_path` when given.
///
/// With no explicit path, a missing default file is not an error: the
/// defaults win. An explicit path must exist and parse.
pub fn load_config(explicit_path: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    match explicit_path {
        Some(path) => load_config_from(path),
        None => match default_config_path() {
            Some(path) if path.exists() => load_config_from(&path),
            _ => Ok(EngineConfig::default()),
        },
    }
}

/// Load configuration from a specific TOML file.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let file: ConfigFile = toml::from_str(&raw).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    Ok(file.into_config())
}

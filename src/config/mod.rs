//! Engine configuration.

pub mod loader;

pub use loader::{default_config_path, load_config, load_config_from, ConfigError, ConfigFile};

use std::path::PathBuf;
use std::time::Duration;

/// Resolved engine configuration.
///
/// Built from hardcoded defaults overlaid with an optional TOML file;
/// see [`loader`] for the file format and precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Pause between narrated query steps. UI pacing only; zero is valid
    /// and makes the narrated query run flat out.
    pub step_delay: Duration,
    /// Maximum retained undo snapshots; `None` keeps history unbounded.
    pub history_depth: Option<usize>,
    /// Tracing output file; `None` leaves logging uninitialized.
    pub log_file: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(500),
            history_depth: None,
            log_file: None,
        }
    }
}


#[cfg(test)]
mod loader_tests;

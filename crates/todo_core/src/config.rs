//! Runtime configuration for embedding processes.
//!
//! Read from the environment:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `TODO_LOG_LEVEL` | `trace\|debug\|info\|warn\|error` | [`default_log_level`] |
//! | `TODO_LOG_DIR` | absolute directory for rolling logs | unset: file logging off |
//!
//! Blank values count as unset.

use crate::logging::{default_log_level, init_logging, normalize_level, LoggingError};
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TODO_LOG_DIR";

/// Process-level settings for the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    /// - `UnsupportedLevel` when `TODO_LOG_LEVEL` is set to an unknown level.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary key lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, LoggingError> {
        let mut config = Self::default();
        if let Some(level) = non_blank(lookup(LOG_LEVEL_ENV)) {
            config.log_level = normalize_level(&level)?;
        }
        config.log_dir = non_blank(lookup(LOG_DIR_ENV)).map(PathBuf::from);
        Ok(config)
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays off.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        let Some(dir) = &self.log_dir else {
            return Ok(false);
        };
        init_logging(self.log_level, &dir.to_string_lossy())?;
        Ok(true)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

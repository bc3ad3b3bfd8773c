//! Logging output configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plaintext,
    Json,
}

/// Logging output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Line format for every output
    #[serde(default)]
    pub format: LogFormat,

    /// Optional file that receives a copy of every line
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn log_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Uses `fallback` as the log file when none was configured.
    ///
    /// Empty values are ignored.
    pub(crate) fn with_fallback_file(mut self, fallback: Option<std::ffi::OsString>) -> Self {
        if self.file.is_none() {
            self.file = fallback.filter(|v| !v.is_empty()).map(PathBuf::from);
        }
        self
    }
}

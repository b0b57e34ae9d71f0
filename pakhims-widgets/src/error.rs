//! Error types for configuration and preference persistence
//!
//! Widget operations never fail; every UI-level failure degrades to a no-op.
//! Only loading configuration and persisting preferences surface errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by configuration loading and preference persistence
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Cannot determine config directory")]
    NoConfigDir,

    #[error("Preference store I/O error: {0}")]
    PreferenceIo(#[from] std::io::Error),

    #[error("Preference store JSON error: {0}")]
    PreferenceJson(#[from] serde_json::Error),
}

/// Result type for configuration and persistence operations
pub type SiteResult<T> = Result<T, SiteError>;

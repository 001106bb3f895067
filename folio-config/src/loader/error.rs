use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ConfigGuardRailError;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("invalid duration in {var} ({raw:?}): {source}")]
    InvalidDuration {
        var: &'static str,
        raw: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}

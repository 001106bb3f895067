pub mod sources;

use std::path::PathBuf;

use folio_core::settings::CarouselSettings;
use serde::{Deserialize, Serialize};

/// Fully composed configuration: file/inline payload plus env overrides.
#[derive(Debug, Clone, Default)]
pub struct FolioConfig {
    pub carousel: CarouselSettings,
    pub logging: LoggingConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub default_directive: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
        }
    }
}

/// Where the base payload came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Provenance details surfaced in startup logs.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    /// Env variables that overrode a value from the payload.
    pub overrides: Vec<&'static str>,
}

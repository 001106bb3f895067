use std::path::PathBuf;

use folio_core::settings::CarouselSettings;
use serde::{Deserialize, Serialize};

use super::LoggingConfig;
use crate::util::non_empty_var;

pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "FOLIO_CONFIG_JSON";
pub const AUTO_ADVANCE_VAR: &str = "FOLIO_AUTO_ADVANCE_INTERVAL";
pub const TRANSITION_VAR: &str = "FOLIO_TRANSITION_DURATION";
pub const RESIZE_QUIET_VAR: &str = "FOLIO_RESIZE_QUIET_PERIOD";

/// Raw configuration as defined in a TOML or JSON payload.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FileConfig {
    pub carousel: CarouselSettings,
    pub logging: LoggingConfig,
}

/// Snapshot of the environment variables the loader cares about.
///
/// Gathered once so the rest of the load is a pure function of its inputs.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
    pub auto_advance_interval: Option<String>,
    pub transition_duration: Option<String>,
    pub resize_quiet_period: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(CONFIG_PATH_VAR).map(PathBuf::from),
            config_json: non_empty_var(CONFIG_JSON_VAR),
            auto_advance_interval: non_empty_var(AUTO_ADVANCE_VAR),
            transition_duration: non_empty_var(TRANSITION_VAR),
            resize_quiet_period: non_empty_var(RESIZE_QUIET_VAR),
        }
    }
}

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::sources::{
    AUTO_ADVANCE_VAR, EnvConfig, FileConfig, RESIZE_QUIET_VAR, TRANSITION_VAR,
};
use crate::models::{ConfigMetadata, ConfigSource, FolioConfig};
use crate::util::{duration_to_ms, parse_duration};
use crate::validation::{ConfigWarnings, validate};

use error::ConfigLoadError;

const DEFAULT_FILE_CANDIDATES: &[&str] = &[
    "folio.toml",
    "folio.json",
    "config/folio.toml",
    "config/folio.json",
];

/// Result of a successful load: the effective config plus any warnings the
/// caller should log.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: FolioConfig,
    pub warnings: ConfigWarnings,
}

/// Composes configuration from, in order of precedence:
///
/// 1. `$FOLIO_CONFIG_PATH` (TOML or JSON file),
/// 2. `$FOLIO_CONFIG_JSON` (inline JSON),
/// 3. the first existing default file (`folio.toml`, `folio.json`,
///    `config/folio.toml`, `config/folio.json`) under the base directory,
/// 4. built-in defaults,
///
/// then applies duration overrides (`FOLIO_AUTO_ADVANCE_INTERVAL`,
/// `FOLIO_TRANSITION_DURATION`, `FOLIO_RESIZE_QUIET_PERIOD`) and guard rails.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    env: Option<EnvConfig>,
    base_dir: PathBuf,
    load_dotenv: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            env: None,
            base_dir: PathBuf::from("."),
            load_dotenv: true,
        }
    }

    /// Use a prepared env snapshot instead of reading the process
    /// environment. Disables `.env` loading.
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.env = Some(env);
        self.load_dotenv = false;
        self
    }

    /// Directory searched for default config files.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let env = self.env.clone().unwrap_or_else(EnvConfig::gather);

        let (file, source) = self.load_payload(&env)?;
        let mut config = FolioConfig {
            carousel: file.carousel,
            logging: file.logging,
            metadata: ConfigMetadata {
                source,
                env_file_loaded,
                overrides: Vec::new(),
            },
        };
        apply_duration_overrides(&env, &mut config)?;

        let warnings = validate(&config)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if !self.load_dotenv {
            return Ok(false);
        }
        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded .env file");
                Ok(true)
            }
            Err(err) if err.not_found() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_payload(
        &self,
        env: &EnvConfig,
    ) -> Result<(FileConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = env.config_path.as_ref() {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = env.config_json.as_deref() {
            let config = parse_json(raw, "FOLIO_CONFIG_JSON")?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((FileConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_FILE_CANDIDATES
            .iter()
            .map(|candidate| self.base_dir.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_from_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                message: err.to_string(),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

/// Try TOML first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<FileConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                message: format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

pub fn parse_json(
    raw: &str,
    origin: &str,
) -> Result<FileConfig, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
        origin: origin.to_string(),
        message: err.to_string(),
    })
}

fn apply_duration_overrides(
    env: &EnvConfig,
    config: &mut FolioConfig,
) -> Result<(), ConfigLoadError> {
    let carousel = &mut config.carousel;
    let applied = &mut config.metadata.overrides;

    override_ms(
        AUTO_ADVANCE_VAR,
        env.auto_advance_interval.as_deref(),
        &mut carousel.auto_advance_interval_ms,
        applied,
    )?;
    override_ms(
        TRANSITION_VAR,
        env.transition_duration.as_deref(),
        &mut carousel.transition_ms,
        applied,
    )?;
    override_ms(
        RESIZE_QUIET_VAR,
        env.resize_quiet_period.as_deref(),
        &mut carousel.resize_quiet_period_ms,
        applied,
    )
}

fn override_ms(
    var: &'static str,
    raw: Option<&str>,
    target: &mut u64,
    applied: &mut Vec<&'static str>,
) -> Result<(), ConfigLoadError> {
    let Some(raw) = raw else {
        return Ok(());
    };
    let duration = parse_duration(raw).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            var,
            raw: raw.to_string(),
            source,
        }
    })?;
    *target = duration_to_ms(duration);
    applied.push(var);
    Ok(())
}

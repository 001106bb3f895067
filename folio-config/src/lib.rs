//! Shared configuration library for Folio.
//!
//! This crate centralizes config loading (file, inline JSON, env overrides),
//! guard-rail validation, and tracing-subscriber setup so the player binary
//! and any embedding host share one source of truth for defaults.

pub mod loader;
pub mod models;
pub mod telemetry;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{ConfigMetadata, ConfigSource, FolioConfig, LoggingConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};

//! Tracing subscriber setup shared by Folio binaries.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::models::LoggingConfig;

/// Install a global `fmt` subscriber. `RUST_LOG` wins over the configured
/// default directive.
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.default_directive).with_context(
            || {
                format!(
                    "invalid logging.default_directive {:?}",
                    logging.default_directive
                )
            },
        )?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("failed to install tracing subscriber")
}

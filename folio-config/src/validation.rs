use thiserror::Error;

use crate::models::FolioConfig;

/// Settings that would leave the carousel unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("carousel.auto_advance_interval_ms must be greater than zero")]
    ZeroAutoAdvanceInterval,

    #[error("carousel.transition_ms must be greater than zero")]
    ZeroTransition,
}

/// Non-fatal observation about the effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, message: impl Into<String>, hint: Option<&str>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: hint.map(str::to_string),
        });
    }
}

/// Reject unusable settings and collect warnings for questionable ones.
pub fn validate(
    config: &FolioConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let carousel = &config.carousel;
    if carousel.auto_advance_interval_ms == 0 {
        return Err(ConfigGuardRailError::ZeroAutoAdvanceInterval);
    }
    if carousel.transition_ms == 0 {
        return Err(ConfigGuardRailError::ZeroTransition);
    }

    let mut warnings = ConfigWarnings::default();
    if carousel.transition_ms >= carousel.auto_advance_interval_ms {
        warnings.push(
            format!(
                "transition ({} ms) is not shorter than the auto-advance period ({} ms)",
                carousel.transition_ms, carousel.auto_advance_interval_ms
            ),
            Some("ticks that land mid-transition are dropped; the track will advance every other tick"),
        );
    }
    if carousel.resize_quiet_period_ms == 0 {
        warnings.push(
            "resize quiet period is zero",
            Some("every resize event re-renders the track"),
        );
    }
    Ok(warnings)
}

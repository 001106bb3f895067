use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;

/// Timing knobs for a carousel instance.
///
/// All fields carry defaults so partial configuration payloads work; the
/// defaults reproduce the portfolio's testimonial track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Period of the auto-advance timer (ms).
    pub auto_advance_interval_ms: u64,
    /// Duration of an animated track transition (ms).
    pub transition_ms: u64,
    /// Timing curve of animated transitions.
    pub easing: Easing,
    /// Quiet period before a burst of resizes re-renders the track (ms).
    pub resize_quiet_period_ms: u64,
    /// Restart the auto-advance timer after button or indicator input so an
    /// automatic step never lands right after a manual one.
    pub restart_auto_advance_on_input: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance_interval_ms: 2_000,
            transition_ms: 800,
            easing: Easing::default(),
            resize_quiet_period_ms: 250,
            restart_auto_advance_on_input: true,
        }
    }
}

impl CarouselSettings {
    pub fn auto_advance_interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_interval_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn resize_quiet_period(&self) -> Duration {
        Duration::from_millis(self.resize_quiet_period_ms)
    }
}

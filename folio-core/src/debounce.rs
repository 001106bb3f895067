//! Quiet-period debouncer.
//!
//! Coalesces a burst of triggers into a single firing once no new trigger has
//! arrived for `quiet_period`. The type is host-driven: callers pass `now`
//! explicitly, so identical trigger sequences always yield identical firings.
//!
//! The carousel uses it for viewport resizes (default quiet period 250 ms),
//! but nothing here knows about resizing.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    last_trigger: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            last_trigger: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// Record a trigger. Any pending firing is pushed back to
    /// `now + quiet_period`.
    pub fn trigger_at(&mut self, now: Instant) {
        self.last_trigger = Some(now);
    }

    /// Returns `true` exactly once per burst, on the first poll at or after
    /// the quiet period has elapsed since the last trigger.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.last_trigger {
            Some(at) if now.saturating_duration_since(at) >= self.quiet_period => {
                self.last_trigger = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending burst fires, `None` when idle.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.last_trigger.map(|at| {
            let elapsed = now.saturating_duration_since(at);
            self.quiet_period.saturating_sub(elapsed)
        })
    }

    /// Drop a pending burst without firing.
    pub fn cancel(&mut self) {
        self.last_trigger = None;
    }
}

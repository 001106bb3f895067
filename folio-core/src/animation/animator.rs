//! Time-based tween that carries the track from one offset to another

use std::time::{Duration, Instant};

use super::Easing;

#[derive(Debug, Clone)]
pub struct TrackAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Default for TrackAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration: Duration::from_millis(800),
            easing: Easing::default(),
        }
    }
}

impl TrackAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Offset the current tween is heading to.
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start_at(
        &mut self,
        now: Instant,
        current: f32,
        target: f32,
        duration: Duration,
        easing: Easing,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
        self.duration = duration;
        self.easing = easing;
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive.
    /// The tick that crosses the deadline yields the exact target and
    /// deactivates the animator.
    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = self
            .started_at
            .map(|at| now.saturating_duration_since(at))
            .unwrap_or(self.duration);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.target);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_animator_yields_nothing() {
        let mut animator = TrackAnimator::new();
        assert!(!animator.is_active());
        assert_eq!(animator.tick_at(Instant::now()), None);
    }

    #[test]
    fn tween_moves_between_offsets_and_lands_exactly() {
        let t0 = Instant::now();
        let mut animator = TrackAnimator::new();
        animator.start_at(
            t0,
            0.0,
            -400.0,
            Duration::from_millis(100),
            Easing::Linear,
        );

        let mid = animator.tick_at(t0 + Duration::from_millis(50)).unwrap();
        assert!((mid + 200.0).abs() < 1.0, "midpoint was {mid}");
        assert!(animator.is_active());

        let last = animator.tick_at(t0 + Duration::from_millis(150)).unwrap();
        assert_eq!(last, -400.0);
        assert!(!animator.is_active());
        assert_eq!(animator.tick_at(t0 + Duration::from_millis(200)), None);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let t0 = Instant::now();
        let mut animator = TrackAnimator::new();
        animator.start_at(t0, 10.0, 20.0, Duration::ZERO, Easing::EaseOut);
        assert_eq!(animator.tick_at(t0), Some(20.0));
        assert!(!animator.is_active());
    }

    #[test]
    fn cancel_stops_the_tween() {
        let t0 = Instant::now();
        let mut animator = TrackAnimator::new();
        animator.start_at(t0, 0.0, 1.0, Duration::from_secs(1), Easing::Linear);
        animator.cancel();
        assert_eq!(animator.tick_at(t0 + Duration::from_millis(10)), None);
    }
}

//! CarouselController: owns the display sequence, the position pointer, the
//! animation lock, and the auto-advance timer.

use std::fmt;

use tracing::{debug, trace, warn};

use super::scheduler::Scheduler;
use super::sequence::DisplaySequence;
use super::surface::{RenderSurface, Transition};
use super::types::{Direction, DropReason, Navigation, Phase};
use crate::error::{CarouselError, Result};
use crate::settings::CarouselSettings;

/// Who asked for a move. Only user input restarts the auto-advance timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    User,
    Timer,
}

pub struct CarouselController<T, S, K: Scheduler> {
    sequence: DisplaySequence<T>,
    surface: S,
    scheduler: K,
    settings: CarouselSettings,

    position: usize,
    direction: Direction,
    phase: Phase,
    timer: Option<K::Handle>,
    /// A resize arrived mid-transition; re-render once it settles.
    resize_pending: bool,
    active: bool,
}

impl<T, S, K> CarouselController<T, S, K>
where
    T: Clone,
    S: RenderSurface,
    K: Scheduler,
{
    /// Build the padded sequence, render the first real item without
    /// animation, and start the auto-advance timer.
    ///
    /// Returns [`CarouselError::NoItems`] for an empty list; the caller is
    /// expected to leave the carousel inactive.
    pub fn new(
        items: Vec<T>,
        surface: S,
        scheduler: K,
        settings: CarouselSettings,
    ) -> Result<Self> {
        let sequence = DisplaySequence::new(items)?;
        let position = sequence.first_real();
        let mut controller = Self {
            sequence,
            surface,
            scheduler,
            settings,
            position,
            direction: Direction::Forward,
            phase: Phase::Idle,
            timer: None,
            resize_pending: false,
            active: true,
        };

        controller.render_static();
        controller.resume();
        debug!(
            items = controller.sequence.original_len(),
            position, "carousel initialised"
        );
        Ok(controller)
    }
}

impl<T, S, K> CarouselController<T, S, K>
where
    S: RenderSurface,
    K: Scheduler,
{
    /// Step one item forward. From the last real item this still moves into
    /// the trailing padding; the snap happens once the transition settles.
    pub fn next(&mut self) -> Navigation {
        if let Err(reason) = self.ensure_ready() {
            return Navigation::Dropped(reason);
        }
        self.begin(self.position + 1, Direction::Forward, Origin::User)
    }

    /// Step one item backward.
    pub fn previous(&mut self) -> Navigation {
        if let Err(reason) = self.ensure_ready() {
            return Navigation::Dropped(reason);
        }
        // Settled positions never drop below N >= 1.
        let target = self.position.saturating_sub(1);
        self.begin(target, Direction::Backward, Origin::User)
    }

    /// Jump to logical index `logical` in `[0, N)`.
    ///
    /// Out-of-range indices are a caller bug; they are logged and ignored
    /// rather than propagated. Jumping onto the resting position is ignored
    /// too.
    pub fn jump_to(&mut self, logical: usize) -> Navigation {
        if let Err(reason) = self.ensure_ready() {
            return Navigation::Dropped(reason);
        }
        let Some(target) = self.sequence.position_of(logical) else {
            warn!(
                logical,
                items = self.sequence.original_len(),
                "ignoring jump to out-of-range carousel index"
            );
            return Navigation::Dropped(DropReason::OutOfRange);
        };
        if target == self.position {
            return Navigation::Dropped(DropReason::AlreadyThere);
        }
        let direction = if target > self.position {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.begin(target, direction, Origin::User)
    }

    /// Timer-driven step. Keeps moving in the current direction and bounces
    /// at the edges of the real band, so the track sweeps back and forth.
    pub fn auto_advance(&mut self) -> Navigation {
        if let Err(reason) = self.ensure_ready() {
            return Navigation::Dropped(reason);
        }

        let first = self.sequence.first_real();
        let last = self.sequence.last_real();
        let (direction, target) = match self.direction {
            Direction::Forward if self.position >= last => {
                (self.direction.reversed(), self.position.saturating_sub(1))
            }
            Direction::Forward => (Direction::Forward, self.position + 1),
            Direction::Backward if self.position <= first => {
                (self.direction.reversed(), self.position + 1)
            }
            Direction::Backward => {
                (Direction::Backward, self.position.saturating_sub(1))
            }
        };
        if direction != self.direction {
            trace!(from = ?self.direction, to = ?direction, "auto-advance bounced");
        }
        self.begin(target, direction, Origin::Timer)
    }

    /// The surface finished animating. Releases the lock and applies the
    /// wraparound snap. Returns the settled position, or `None` when no
    /// transition was in flight (stray completion events are ignored).
    pub fn transition_finished(&mut self) -> Option<usize> {
        if !self.active {
            trace!("ignoring transition end after teardown");
            return None;
        }
        if self.phase != Phase::Transitioning {
            trace!("ignoring transition end while idle");
            return None;
        }
        self.phase = Phase::Idle;

        let snapped = self.sequence.wraparound_target(self.position);
        if let Some(target) = snapped {
            debug!(from = self.position, to = target, "carousel snapped into real band");
            self.position = target;
        }

        let resized = std::mem::take(&mut self.resize_pending);
        if snapped.is_some() || resized {
            self.render_static();
        } else {
            self.sync_indicator();
        }
        Some(self.position)
    }

    /// Viewport size changed (already debounced by the host). Re-measures
    /// and re-renders the current position without animation. An in-flight
    /// transition is left alone; the re-render is applied once it settles.
    ///
    /// Returns `true` when the track was repositioned right away.
    pub fn on_resize(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if self.phase == Phase::Transitioning {
            self.resize_pending = true;
            trace!("deferring resize until transition settles");
            return false;
        }
        self.render_static()
    }

    fn ensure_ready(&self) -> std::result::Result<(), DropReason> {
        if !self.active {
            return Err(DropReason::Inactive);
        }
        if self.phase == Phase::Transitioning {
            trace!(position = self.position, "navigation dropped mid-transition");
            return Err(DropReason::Transitioning);
        }
        Ok(())
    }

    fn stride(&self) -> Result<f32> {
        self.surface
            .measure()
            .and_then(|metrics| metrics.stride())
            .ok_or(CarouselError::MeasurementUnavailable)
    }

    fn offset_for(position: usize, stride: f32) -> f32 {
        -(position as f32) * stride
    }

    /// Commit a move and start the animated translation. Nothing changes if
    /// the track cannot be measured.
    fn begin(
        &mut self,
        target: usize,
        direction: Direction,
        origin: Origin,
    ) -> Navigation {
        let stride = match self.stride() {
            Ok(stride) => stride,
            Err(err) => {
                debug!(%err, target, "navigation skipped");
                return Navigation::Dropped(DropReason::MeasurementUnavailable);
            }
        };

        let from = self.position;
        self.position = target;
        self.direction = direction;
        self.phase = Phase::Transitioning;

        let transition = Transition {
            duration: self.settings.transition_duration(),
            easing: self.settings.easing,
        };
        self.surface
            .translate(Self::offset_for(target, stride), Some(transition));
        self.sync_indicator();

        if origin == Origin::User
            && self.settings.restart_auto_advance_on_input
            && self.timer.is_some()
        {
            self.restart_timer();
        }

        debug!(from, to = target, ?direction, ?origin, "carousel transition started");
        Navigation::Started { from, to: target }
    }

    /// Unanimated render of the current position. Skips positioning (but
    /// still syncs the indicator) when metrics are unavailable.
    fn render_static(&mut self) -> bool {
        let positioned = match self.stride() {
            Ok(stride) => {
                self.surface
                    .translate(Self::offset_for(self.position, stride), None);
                true
            }
            Err(err) => {
                debug!(%err, position = self.position, "render skipped");
                false
            }
        };
        self.sync_indicator();
        positioned
    }

    fn sync_indicator(&mut self) {
        let index = self.normalized_index();
        self.surface.highlight_indicator(index);
    }
}

impl<T, S, K: Scheduler> CarouselController<T, S, K> {
    /// Stop the auto-advance timer (pointer entered the carousel). Idempotent.
    pub fn pause(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            debug!("auto-advance paused");
        }
    }

    /// (Re)start the auto-advance timer (pointer left the carousel).
    /// Idempotent: afterwards exactly one timer is live.
    pub fn resume(&mut self) {
        if !self.active {
            return;
        }
        self.restart_timer();
        debug!(
            period_ms = self.settings.auto_advance_interval_ms,
            "auto-advance running"
        );
    }

    /// Cancel the timer and deactivate. Later calls are ignored.
    pub fn teardown(&mut self) {
        self.pause();
        if self.active {
            self.active = false;
            debug!("carousel torn down");
        }
    }

    fn restart_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        let period = self.settings.auto_advance_interval();
        self.timer = Some(self.scheduler.schedule_repeating(period));
    }

    /// Logical index of the item on display, always in `[0, N)`.
    pub fn normalized_index(&self) -> usize {
        self.sequence.logical_index(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn sequence(&self) -> &DisplaySequence<T> {
        &self.sequence
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &K {
        &self.scheduler
    }
}

impl<T, S, K: Scheduler> Drop for CarouselController<T, S, K> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T, S, K: Scheduler> fmt::Debug for CarouselController<T, S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("items", &self.sequence.original_len())
            .field("position", &self.position)
            .field("direction", &self.direction)
            .field("phase", &self.phase)
            .field("auto_advancing", &self.timer.is_some())
            .field("resize_pending", &self.resize_pending)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

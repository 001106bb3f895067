use std::time::Duration;

/// Owner of recurring timers.
///
/// The controller keeps at most one handle alive at a time. Each tick must be
/// delivered by the host calling
/// [`CarouselController::auto_advance`](super::CarouselController::auto_advance).
pub trait Scheduler {
    /// Token identifying a scheduled timer.
    type Handle;

    /// Start a timer that ticks every `period`.
    fn schedule_repeating(&mut self, period: Duration) -> Self::Handle;

    /// Stop a timer. Cancelling an already finished timer is harmless.
    fn cancel(&mut self, handle: Self::Handle);
}

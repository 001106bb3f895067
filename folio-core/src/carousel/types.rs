//! Shared types for the carousel module

/// Last movement direction. Auto-advance keeps going this way until it hits
/// an edge of the real band, then bounces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Direction after a bounce.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Whether a track transition is in flight. `Transitioning` doubles as the
/// animation lock: navigation is refused until the surface reports the
/// transition finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// A transition from `from` to `to` was started.
    Started { from: usize, to: usize },
    /// The request was ignored; controller state is untouched.
    Dropped(DropReason),
}

impl Navigation {
    pub fn is_started(&self) -> bool {
        matches!(self, Navigation::Started { .. })
    }
}

/// Why a navigation request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The controller was torn down.
    Inactive,
    /// Another transition is still in flight. Requests are not queued.
    Transitioning,
    /// The surface could not report usable track metrics.
    MeasurementUnavailable,
    /// `jump_to` got a logical index outside `[0, N)`.
    OutOfRange,
    /// `jump_to` targeted the position the track already rests on.
    AlreadyThere,
}

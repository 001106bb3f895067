use folio_core::carousel::{Direction, Phase};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;
use tracing::trace;

/// Identifies one scheduled auto-advance timer. Ticks from a cancelled timer
/// can still be sitting in the queue; the id lets the actor discard them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Point-in-time view of the controller, answered by the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselStatus {
    pub position: usize,
    pub normalized_index: usize,
    pub direction: Direction,
    pub phase: Phase,
    pub auto_advancing: bool,
    pub live_timers: usize,
}

/// Messages accepted by the carousel actor.
#[derive(Debug)]
pub enum CarouselCommand {
    Next,
    Previous,
    JumpTo(usize),
    PointerEnter,
    PointerLeave,
    /// Viewport size settled (already debounced).
    Resized,
    TransitionFinished,
    AutoAdvanceTick(TimerId),
    Status(oneshot::Sender<CarouselStatus>),
    Shutdown,
}

/// Narrow handle given to render surfaces so they can report that an
/// animated translation completed.
#[derive(Debug, Clone)]
pub struct TransitionNotifier {
    commands: UnboundedSender<CarouselCommand>,
}

impl TransitionNotifier {
    pub(crate) fn new(commands: UnboundedSender<CarouselCommand>) -> Self {
        Self { commands }
    }

    pub fn notify(&self) {
        if self.commands.send(CarouselCommand::TransitionFinished).is_err() {
            trace!("carousel gone; dropping transition completion");
        }
    }
}

use std::collections::HashSet;
use std::time::Duration;

use folio_core::carousel::Scheduler;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{trace, warn};

use super::command::{CarouselCommand, TimerId};

/// Shortest period handed to tokio; `interval` rejects zero.
pub const MIN_TIMER_PERIOD: Duration = Duration::from_millis(1);

/// A spawned interval task posting [`CarouselCommand::AutoAdvanceTick`].
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    task: JoinHandle<()>,
}

/// [`Scheduler`] backed by tokio timers. Must be used from within a tokio
/// runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    commands: UnboundedSender<CarouselCommand>,
    next_id: u64,
    live: HashSet<TimerId>,
}

impl TokioScheduler {
    pub fn new(commands: UnboundedSender<CarouselCommand>) -> Self {
        Self {
            commands,
            next_id: 0,
            live: HashSet::new(),
        }
    }

    /// Whether ticks from `id` should still be honoured.
    pub fn is_live(&self, id: TimerId) -> bool {
        self.live.contains(&id)
    }

    pub fn live_timers(&self) -> usize {
        self.live.len()
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TimerHandle;

    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        let period = if period < MIN_TIMER_PERIOD {
            warn!(?period, min = ?MIN_TIMER_PERIOD, "auto-advance period too short; clamping");
            MIN_TIMER_PERIOD
        } else {
            period
        };

        self.next_id += 1;
        let id = TimerId(self.next_id);
        let commands = self.commands.clone();

        let task = tokio::spawn(async move {
            // First tick one full period from now, not immediately.
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if commands.send(CarouselCommand::AutoAdvanceTick(id)).is_err() {
                    break;
                }
            }
        });

        self.live.insert(id);
        trace!(timer = id.0, ?period, "auto-advance timer scheduled");
        TimerHandle { id, task }
    }

    fn cancel(&mut self, handle: TimerHandle) {
        handle.task.abort();
        self.live.remove(&handle.id);
        trace!(timer = handle.id.0, "auto-advance timer cancelled");
    }
}

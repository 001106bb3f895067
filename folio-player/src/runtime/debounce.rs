use std::time::Duration;

use folio_core::debounce::Debouncer;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::trace;

/// Async trailing-edge debounce: `on_fire` runs once after a burst of
/// [`trigger`](Self::trigger) calls has been quiet for the configured period.
///
/// The background task is aborted when the signal is dropped; a burst that
/// has not fired yet is discarded.
#[derive(Debug)]
pub struct DebouncedSignal {
    triggers: UnboundedSender<()>,
    task: JoinHandle<()>,
}

impl DebouncedSignal {
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(quiet_period: Duration, mut on_fire: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (triggers, mut rx) = mpsc::unbounded_channel::<()>();

        let task = tokio::spawn(async move {
            let mut debouncer = Debouncer::new(quiet_period);
            loop {
                let wait = debouncer.time_until_fire(Instant::now().into_std());
                tokio::select! {
                    received = rx.recv() => match received {
                        Some(()) => debouncer.trigger_at(Instant::now().into_std()),
                        None => break,
                    },
                    _ = time::sleep(wait.unwrap_or_default()), if wait.is_some() => {
                        if debouncer.poll_at(Instant::now().into_std()) {
                            trace!(?quiet_period, "debounced signal fired");
                            on_fire();
                        }
                    }
                }
            }
        });

        Self { triggers, task }
    }

    pub fn trigger(&self) {
        // Only fails once the task is gone, at which point nobody listens.
        let _ = self.triggers.send(());
    }
}

impl Drop for DebouncedSignal {
    fn drop(&mut self) {
        self.task.abort();
    }
}

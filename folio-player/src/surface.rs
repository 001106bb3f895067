//! Headless render surface: keeps the track offset and active indicator in
//! memory and animates translations on the tokio clock.

use std::sync::Arc;
use std::time::Duration;

use folio_core::animation::TrackAnimator;
use folio_core::carousel::{RenderSurface, TrackMetrics, Transition};
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::runtime::TransitionNotifier;

/// Roughly one frame at 60 Hz.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Shared, host-controlled layout. The host updates the metrics when the
/// viewport changes and then calls
/// [`CarouselHandle::resized`](crate::CarouselHandle::resized).
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    metrics: Arc<RwLock<Option<TrackMetrics>>>,
}

impl Viewport {
    pub fn new(metrics: Option<TrackMetrics>) -> Self {
        Self {
            metrics: Arc::new(RwLock::new(metrics)),
        }
    }

    pub fn set_metrics(&self, metrics: Option<TrackMetrics>) {
        *self.metrics.write() = metrics;
    }

    pub fn metrics(&self) -> Option<TrackMetrics> {
        *self.metrics.read()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackSnapshot {
    pub offset: f32,
    pub active_indicator: Option<usize>,
    pub animations_started: u64,
    pub animations_finished: u64,
    pub static_renders: u64,
}

/// Read side of a [`HeadlessSurface`], usable after the surface has been
/// moved into the carousel task.
#[derive(Debug, Clone, Default)]
pub struct TrackProbe {
    state: Arc<RwLock<TrackSnapshot>>,
}

impl TrackProbe {
    pub fn snapshot(&self) -> TrackSnapshot {
        *self.state.read()
    }
}

#[derive(Debug)]
pub struct HeadlessSurface {
    viewport: Viewport,
    probe: TrackProbe,
    notifier: TransitionNotifier,
    frame_interval: Duration,
    animation: Option<JoinHandle<()>>,
}

impl HeadlessSurface {
    pub fn new(viewport: Viewport, notifier: TransitionNotifier) -> Self {
        Self {
            viewport,
            probe: TrackProbe::default(),
            notifier,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            animation: None,
        }
    }

    /// Publish state through an existing probe instead of a fresh one.
    pub fn with_probe(mut self, probe: TrackProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval.max(Duration::from_millis(1));
        self
    }

    pub fn probe(&self) -> TrackProbe {
        self.probe.clone()
    }

    fn stop_animation(&mut self) {
        if let Some(task) = self.animation.take()
            && !task.is_finished()
        {
            task.abort();
            trace!("interrupted running track animation");
        }
    }

    fn animate(&mut self, target: f32, transition: Transition) {
        let state = Arc::clone(&self.probe.state);
        let notifier = self.notifier.clone();
        let frame_interval = self.frame_interval;
        let start = {
            let mut snapshot = state.write();
            snapshot.animations_started += 1;
            snapshot.offset
        };

        self.animation = Some(tokio::spawn(async move {
            let mut animator = TrackAnimator::new();
            animator.start_at(
                Instant::now().into_std(),
                start,
                target,
                transition.duration,
                transition.easing,
            );

            let mut frames = time::interval(frame_interval);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                frames.tick().await;
                let Some(offset) = animator.tick_at(Instant::now().into_std())
                else {
                    break;
                };
                state.write().offset = offset;
                trace!(offset, "track frame");
                if !animator.is_active() {
                    break;
                }
            }

            state.write().animations_finished += 1;
            notifier.notify();
        }));
    }
}

impl RenderSurface for HeadlessSurface {
    fn measure(&self) -> Option<TrackMetrics> {
        self.viewport.metrics()
    }

    fn translate(&mut self, offset: f32, transition: Option<Transition>) {
        self.stop_animation();
        match transition {
            Some(transition) => self.animate(offset, transition),
            None => {
                let mut snapshot = self.probe.state.write();
                snapshot.offset = offset;
                snapshot.static_renders += 1;
                trace!(offset, "track positioned");
            }
        }
    }

    fn highlight_indicator(&mut self, index: usize) {
        let mut snapshot = self.probe.state.write();
        if snapshot.active_indicator != Some(index) {
            debug!(index, "indicator highlighted");
        }
        snapshot.active_indicator = Some(index);
    }
}

impl Drop for HeadlessSurface {
    fn drop(&mut self) {
        self.stop_animation();
    }
}

//! Shared fakes for carousel integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::time::Duration;

use folio_core::CarouselController;
use folio_core::carousel::{RenderSurface, Scheduler, TrackMetrics, Transition};
use folio_core::settings::CarouselSettings;

/// Surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub metrics: Option<TrackMetrics>,
    pub translations: Vec<(f32, Option<Transition>)>,
    pub highlighted: Vec<usize>,
}

impl RecordingSurface {
    pub fn measured(item_width: f32, gap: f32) -> Self {
        Self {
            metrics: Some(TrackMetrics::new(item_width, gap)),
            ..Self::default()
        }
    }

    pub fn unmeasured() -> Self {
        Self::default()
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.translations.last().map(|(offset, _)| *offset)
    }

    pub fn last_was_animated(&self) -> bool {
        matches!(self.translations.last(), Some((_, Some(_))))
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.highlighted.last().copied()
    }
}

impl RenderSurface for RecordingSurface {
    fn measure(&self) -> Option<TrackMetrics> {
        self.metrics
    }

    fn translate(&mut self, offset: f32, transition: Option<Transition>) {
        self.translations.push((offset, transition));
    }

    fn highlight_indicator(&mut self, index: usize) {
        self.highlighted.push(index);
    }
}

/// Scheduler that only books timers; ticks are delivered by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pub live: BTreeSet<u64>,
    pub periods: Vec<Duration>,
    pub cancelled: usize,
}

impl ManualScheduler {
    pub fn live_timers(&self) -> usize {
        self.live.len()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule_repeating(&mut self, period: Duration) -> u64 {
        self.next_id += 1;
        self.live.insert(self.next_id);
        self.periods.push(period);
        self.next_id
    }

    fn cancel(&mut self, handle: u64) {
        if self.live.remove(&handle) {
            self.cancelled += 1;
        }
    }
}

pub type TestCarousel =
    CarouselController<usize, RecordingSurface, ManualScheduler>;

/// Carousel over `0..n` on a 300px item / 20px gap track.
pub fn carousel(n: usize) -> TestCarousel {
    carousel_with(n, CarouselSettings::default())
}

pub fn carousel_with(n: usize, settings: CarouselSettings) -> TestCarousel {
    CarouselController::new(
        (0..n).collect(),
        RecordingSurface::measured(300.0, 20.0),
        ManualScheduler::default(),
        settings,
    )
    .expect("non-empty carousel")
}

/// Drive one navigation to completion the way a surface would.
pub fn settle(carousel: &mut TestCarousel) -> Option<usize> {
    carousel.transition_finished()
}

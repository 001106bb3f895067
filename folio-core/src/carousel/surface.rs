use std::time::Duration;

use crate::animation::Easing;

/// Measured geometry of the track: rendered item width plus the gap between
/// neighbouring items. Re-measured on every render because item size follows
/// the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub item_width: f32,
    pub gap: f32,
}

impl TrackMetrics {
    pub const fn new(item_width: f32, gap: f32) -> Self {
        Self { item_width, gap }
    }

    /// Distance between the starts of two neighbouring items, or `None` when
    /// the layout is not usable yet. An unparsable (non-finite) gap counts
    /// as zero.
    pub fn stride(&self) -> Option<f32> {
        if !self.item_width.is_finite() || self.item_width <= 0.0 {
            return None;
        }
        let gap = if self.gap.is_finite() {
            self.gap.max(0.0)
        } else {
            0.0
        };
        Some(self.item_width + gap)
    }
}

/// Animation request attached to an animated translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

/// The thing the carousel draws on.
///
/// Implementations must report completion of every animated translation by
/// calling [`CarouselController::transition_finished`] (directly or through
/// the host's event queue), otherwise the controller stays locked. Unanimated
/// translations (`transition == None`) must not report completion.
///
/// [`CarouselController::transition_finished`]: super::CarouselController::transition_finished
pub trait RenderSurface {
    /// Current track geometry, `None` if layout has not happened yet.
    fn measure(&self) -> Option<TrackMetrics>;

    /// Move the track to `offset` pixels, animated when `transition` is set.
    fn translate(&mut self, offset: f32, transition: Option<Transition>);

    /// Mark indicator `index` active and every other one inactive.
    fn highlight_indicator(&mut self, index: usize);
}

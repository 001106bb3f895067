//! # Folio Core
//!
//! Presentation-layer building blocks for the Folio portfolio front-end.
//!
//! ## Overview
//!
//! The centrepiece is [`carousel::CarouselController`], an infinite-loop
//! carousel that pads its items on both sides and silently snaps back into
//! the real band once a transition settles. Everything the controller touches
//! in the outside world goes through two narrow traits:
//!
//! - [`carousel::RenderSurface`]: measures the track, applies translations,
//!   highlights indicators.
//! - [`carousel::Scheduler`]: owns the recurring auto-advance timer.
//!
//! Supporting modules:
//!
//! - [`debounce`]: host-driven quiet-period debouncer used for resize bursts
//! - [`animation`]: easing curves and a time-based track tween for surfaces
//!   that do not animate natively
//! - [`settings`]: serde-backed tuning knobs with the site's defaults
//!
//! ## Examples
//!
//! ```no_run
//! use std::time::Duration;
//! use folio_core::carousel::{
//!     CarouselController, RenderSurface, Scheduler, TrackMetrics, Transition,
//! };
//! use folio_core::settings::CarouselSettings;
//!
//! struct Surface;
//!
//! impl RenderSurface for Surface {
//!     fn measure(&self) -> Option<TrackMetrics> {
//!         Some(TrackMetrics::new(320.0, 24.0))
//!     }
//!     fn translate(&mut self, _offset: f32, _transition: Option<Transition>) {}
//!     fn highlight_indicator(&mut self, _index: usize) {}
//! }
//!
//! struct NoTimers;
//!
//! impl Scheduler for NoTimers {
//!     type Handle = ();
//!     fn schedule_repeating(&mut self, _period: Duration) {}
//!     fn cancel(&mut self, _handle: ()) {}
//! }
//!
//! let mut carousel = CarouselController::new(
//!     vec!["first", "second", "third"],
//!     Surface,
//!     NoTimers,
//!     CarouselSettings::default(),
//! )?;
//! carousel.next();
//! carousel.transition_finished();
//! assert_eq!(carousel.normalized_index(), 1);
//! # Ok::<(), folio_core::error::CarouselError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Easing curves and the track tween animator
pub mod animation;

/// Infinite-loop carousel controller and its collaborator traits
pub mod carousel;

/// Quiet-period debouncing for bursty signals
pub mod debounce;

/// Error types and error handling utilities
pub mod error;

/// Tunable carousel timings
pub mod settings;

pub use carousel::{CarouselController, Direction, Navigation};
pub use error::{CarouselError, Result};
pub use settings::CarouselSettings;

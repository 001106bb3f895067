//! Tokio host for Folio carousels.
//!
//! [`runtime::spawn_carousel`] moves a [`folio_core::CarouselController`] into
//! a single task that owns it exclusively and consumes one command queue.
//! Button clicks, pointer hover, timer ticks, debounced resizes, and
//! transition completions all arrive on that queue, so they are processed
//! strictly in arrival order.

pub mod runtime;
pub mod surface;

pub use runtime::{CarouselHandle, CarouselTask, spawn_carousel};
pub use surface::{HeadlessSurface, TrackProbe, TrackSnapshot, Viewport};

//! Infinite-loop carousel
//!
//! The carousel pads its items with a full copy on each side
//! (`clone ++ items ++ clone`) and keeps its position inside the middle band.
//! A transition may step one slot into the padding; once it settles the
//! controller snaps back into the band without animation, which reads as an
//! endless loop to the viewer.
//!
//! The module separates the pure sequence arithmetic ([`sequence`]), the
//! collaborator seams ([`surface`], [`scheduler`]), and the state machine
//! itself ([`controller`]).

pub mod controller;
pub mod scheduler;
pub mod sequence;
pub mod surface;
pub mod types;

pub use controller::CarouselController;
pub use scheduler::Scheduler;
pub use sequence::DisplaySequence;
pub use surface::{RenderSurface, TrackMetrics, Transition};
pub use types::{Direction, DropReason, Navigation, Phase};

//! Easing curves and a time-based tween for the carousel track.
//!
//! Browsers animate the track natively; other surfaces (the headless player
//! surface, tests) drive [`TrackAnimator`] from their own frame clock.

pub mod animator;
pub mod easing;

pub use animator::TrackAnimator;
pub use easing::Easing;

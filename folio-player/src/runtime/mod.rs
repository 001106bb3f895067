//! Single-owner event loop around the carousel controller

pub mod actor;
pub mod command;
pub mod debounce;
pub mod scheduler;

pub use actor::{CarouselHandle, CarouselTask, spawn_carousel};
pub use command::{
    CarouselCommand, CarouselStatus, TimerId, TransitionNotifier,
};
pub use debounce::DebouncedSignal;
pub use scheduler::{TimerHandle, TokioScheduler};

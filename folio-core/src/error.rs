use thiserror::Error;

/// Failures the carousel can report. None of them are fatal: callers degrade
/// to "do nothing this tick".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// The carousel was handed an empty item list and stays inactive.
    #[error("carousel has no items to display")]
    NoItems,

    /// Layout metrics are not available yet (zero, negative, or non-finite
    /// stride). Transient: the next triggering event retries.
    #[error("track metrics unavailable")]
    MeasurementUnavailable,
}

/// Result alias used across `folio-core`.
pub type Result<T> = std::result::Result<T, CarouselError>;

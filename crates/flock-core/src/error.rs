//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FlockError` as one
//! variant via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// The top-level error type for `flock-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlockError {
    /// A parameter block broke one of its invariants (negative radius,
    /// `min_speed > max_speed`, non-finite value, …).
    #[error("invalid flock parameters: {0}")]
    InvalidParams(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;

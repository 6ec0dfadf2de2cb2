use flock_core::FlockError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// A parameter block or run configuration failed validation.
    #[error(transparent)]
    Core(#[from] FlockError),

    #[error("failed to build worker thread pool: {0}")]
    ThreadPool(String),
}

pub type SimResult<T> = Result<T, SimError>;

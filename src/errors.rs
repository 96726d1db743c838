use thiserror::Error;

/// The central error type for cyclebuf operations.
///
/// Every failure is reported synchronously to the immediate caller and
/// leaves the buffer in its prior state; partial writes are never visible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("capacity {requested} cannot hold {live} live elements")]
    InvalidCapacity { requested: usize, live: usize },

    #[error("buffer is empty")]
    Empty,

    #[error("buffer is full (capacity {capacity}) and overwrite is disabled")]
    CapacityExceeded { capacity: usize },

    #[error("operation '{operation}' is not supported by this collection")]
    Unsupported { operation: &'static str },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

pub type Result<T> = std::result::Result<T, RingError>;

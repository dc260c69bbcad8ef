//! Error taxonomy for ring buffer construction and relative indexing.

use thiserror::Error;

/// Errors raised by [`RingBuffer`](crate::RingBuffer) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    #[error("RingBuffer capacity must be greater than 0")]
    InvalidCapacity,
    #[error("Indexed access into an empty RingBuffer")]
    EmptyBufferAccess,
    #[error("Relative index {index} out of range for RingBuffer of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

/// Result type for ring buffer operations
pub type RingBufferResult<T> = Result<T, RingBufferError>;

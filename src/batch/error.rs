//! Batching error types.

use thiserror::Error;

/// Batching and padding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("cannot pad an empty batch")]
    EmptyBatch,

    #[error("invalid batch size: {0} (must be positive)")]
    InvalidBatchSize(usize),
}

/// Result type for batching operations
pub type Result<T> = std::result::Result<T, BatchError>;

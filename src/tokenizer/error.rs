//! Tokenizer error types.

use std::path::PathBuf;

use thiserror::Error;

/// Tokenizer errors
#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid subword model {path}: {reason}")]
    Model { path: PathBuf, reason: String },

    #[error("subword model vocabulary mismatch: expected {expected}, model has {actual}")]
    VocabMismatch { expected: usize, actual: usize },
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;

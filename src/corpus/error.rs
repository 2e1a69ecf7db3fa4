//! Corpus reading error types.

use thiserror::Error;

use crate::tokenizer::TokenizerError;

/// Corpus reading errors
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("tokenization failed: {0}")]
    Tokenize(#[from] TokenizerError),
}

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;

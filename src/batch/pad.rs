//! Sentence padding.

use super::error::{BatchError, Result};
use crate::corpus::Sentence;

/// Pad sentences to the length of the longest sentence in the set.
///
/// Returns new sentences; the input is left unaliased. Each output sentence
/// starts with the original tokens in order, followed by copies of
/// `pad_token` up to the maximum original length. Padding an already-uniform
/// set is a no-op copy.
///
/// # Errors
///
/// [`BatchError::EmptyBatch`] when `sentences` is empty.
pub fn pad_sentences(sentences: &[Sentence], pad_token: &str) -> Result<Vec<Sentence>> {
    let max_len = sentences.iter().map(Sentence::len).max().ok_or(BatchError::EmptyBatch)?;

    Ok(sentences
        .iter()
        .map(|sentence| {
            let mut padded = sentence.clone();
            padded.resize(max_len, pad_token.to_string());
            padded
        })
        .collect())
}

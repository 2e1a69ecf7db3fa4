//! Iterator over parallel-corpus batches.

use std::cmp::Reverse;

use rand::prelude::*;
use rand::rngs::StdRng;

use super::config::BatchConfig;
use super::error::{BatchError, Result};
use crate::corpus::{Example, Sentence};

/// Lazy iterator over `(source sentences, target sentences)` batches.
///
/// Single pass and non-restartable: once exhausted, build a new iterator to
/// go again. The example order is fixed at construction (identity order, or
/// one up-front shuffle); each batch takes the next contiguous slice of that
/// order and re-sorts it by descending source length before yielding. Sort
/// ties keep the slice order (stable sort), and `sources[i]` stays paired
/// with `targets[i]`.
#[derive(Debug, Clone)]
pub struct BatchIter {
    data: Vec<Example>,
    /// Iteration order over `data`, fixed at construction.
    indices: Vec<usize>,
    batch_size: usize,
    /// Start of the next batch's slice within `indices`.
    cursor: usize,
}

impl BatchIter {
    /// Create a batch iterator over a parallel corpus.
    ///
    /// # Errors
    ///
    /// [`BatchError::InvalidBatchSize`] when the configured batch size is 0.
    pub fn new(data: Vec<Example>, config: &BatchConfig) -> Result<Self> {
        if config.batch_size() == 0 {
            return Err(BatchError::InvalidBatchSize(0));
        }

        let mut indices: Vec<usize> = (0..data.len()).collect();
        if config.shuffle() {
            match config.seed() {
                Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(seed)),
                None => indices.shuffle(&mut rand::rng()),
            }
        }

        Ok(Self { data, indices, batch_size: config.batch_size(), cursor: 0 })
    }

    /// Total number of batches this iterator yields.
    #[must_use]
    pub fn num_batches(&self) -> usize {
        self.data.len().div_ceil(self.batch_size)
    }

    /// Number of batches not yet yielded.
    fn remaining(&self) -> usize {
        (self.indices.len() - self.cursor).div_ceil(self.batch_size)
    }
}

impl Iterator for BatchIter {
    type Item = (Vec<Sentence>, Vec<Sentence>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.indices.len() {
            return None;
        }
        let end = (self.cursor + self.batch_size).min(self.indices.len());
        let mut examples: Vec<&Example> =
            self.indices[self.cursor..end].iter().map(|&i| &self.data[i]).collect();
        self.cursor = end;

        examples.sort_by_key(|e| Reverse(e.source_len()));

        let sources = examples.iter().map(|e| e.source.clone()).collect();
        let targets = examples.iter().map(|e| e.target.clone()).collect();
        Some((sources, targets))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BatchIter {}

/// Create a batch iterator from a batch size and shuffle flag.
///
/// Convenience wrapper over [`BatchIter::new`] with a [`BatchConfig`].
///
/// # Errors
///
/// [`BatchError::InvalidBatchSize`] when `batch_size` is 0.
pub fn batch_iter(data: Vec<Example>, batch_size: usize, shuffle: bool) -> Result<BatchIter> {
    let config = BatchConfig::new().with_batch_size(batch_size).with_shuffle(shuffle);
    BatchIter::new(data, &config)
}

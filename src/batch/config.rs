//! Configuration for batch iteration.

use serde::{Deserialize, Serialize};

/// Configuration for batch iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Examples per batch (the final batch may be smaller).
    batch_size: usize,
    /// Whether to shuffle the example order once before slicing.
    shuffle: bool,
    /// Random seed for the shuffle; `None` uses a thread-local RNG.
    seed: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 32, shuffle: false, seed: None }
    }
}

impl BatchConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Enable or disable shuffling.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get the batch size.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Get whether shuffling is enabled.
    #[must_use]
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Get the shuffle seed.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

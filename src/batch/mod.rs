//! Batching and padding for parallel corpora.
//!
//! [`BatchIter`] partitions a parallel corpus into fixed-size batches,
//! optionally shuffling the example order once up front, and yields each
//! batch sorted by descending source length. [`pad_sentences`] brings a
//! batch's sentences to uniform length with a pad token.
//!
//! # Example
//!
//! ```
//! use preparar::batch::{batch_iter, pad_sentences};
//! use preparar::corpus::Example;
//!
//! let data = vec![
//!     Example::new(vec!["a".into()], vec!["x".into()]),
//!     Example::new(vec!["b".into(), "c".into()], vec!["y".into()]),
//! ];
//!
//! let mut batches = batch_iter(data, 2, false).unwrap();
//! let (sources, targets) = batches.next().unwrap();
//! assert_eq!(sources[0].len(), 2); // longest source first
//! assert_eq!(targets.len(), 2);
//!
//! let padded = pad_sentences(&sources, "<pad>").unwrap();
//! assert!(padded.iter().all(|s| s.len() == 2));
//! ```

mod config;
mod error;
mod iter;
mod pad;


pub use config::BatchConfig;
pub use error::{BatchError, Result};
pub use iter::{batch_iter, BatchIter};
pub use pad::pad_sentences;

//! Corpus reading: newline-delimited text files into tokenized sentences.
//!
//! One [`Sentence`] per input line, in file order; blank lines are kept.
//! Target-side sentences are wrapped with the `<s>` / `</s>` boundary tokens,
//! source-side sentences stay unwrapped.
//!
//! # Example
//!
//! ```no_run
//! use preparar::corpus::{read_corpus_plain, Side};
//!
//! fn example() -> Result<(), preparar::CorpusError> {
//!     let corpus = read_corpus_plain("train.en", Side::Target)?;
//!     for sentence in &corpus {
//!         assert_eq!(sentence.first().map(String::as_str), Some("<s>"));
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod example;
mod reader;
mod side;


pub use error::{CorpusError, Result};
pub use example::{Corpus, Example, Sentence, Token};
pub use reader::{read_corpus, read_corpus_plain, CorpusReader};
pub use side::Side;

//! Sequence data preparation for seq2seq training pipelines.
//!
//! Three building blocks, composed caller-side:
//!
//! - [`corpus`] reads a newline-delimited text file into tokenized sentences,
//!   wrapping target-side sentences with `<s>` / `</s>` boundary tokens.
//! - [`batch`] partitions a parallel corpus into fixed-size batches (optionally
//!   shuffled), sorts each batch by descending source length, and pads
//!   sentences to uniform length.
//! - [`tokenizer`] provides the two tokenization strategies: a pre-trained
//!   subword model and a rule-based word tokenizer.
//!
//! # Example
//!
//! ```no_run
//! use preparar::{batch_iter, pad_sentences, read_corpus_plain, Example, Side};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let sources = read_corpus_plain("train.de", Side::Source)?;
//!     let targets = read_corpus_plain("train.en", Side::Target)?;
//!
//!     let data: Vec<Example> = sources
//!         .into_iter()
//!         .zip(targets)
//!         .map(|(src, tgt)| Example::new(src, tgt))
//!         .collect();
//!
//!     for (src_batch, _tgt_batch) in batch_iter(data, 32, true)? {
//!         let padded = pad_sentences(&src_batch, "<pad>")?;
//!         assert!(padded.iter().all(|s| s.len() == padded[0].len()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod corpus;
pub mod tokenizer;
pub mod util;

pub use batch::{batch_iter, pad_sentences, BatchConfig, BatchError, BatchIter};
pub use corpus::{
    read_corpus, read_corpus_plain, Corpus, CorpusError, CorpusReader, Example, Sentence, Side,
    Token,
};
pub use tokenizer::{SpecialTokens, SubwordTokenizer, Tokenize, TokenizerError, WordTokenizer};

//! Tokenization strategies for corpus reading.
//!
//! Two strategies, both producing string pieces rather than token ids:
//!
//! - [`SubwordTokenizer`] applies a pre-trained subword merge model loaded
//!   from a side-named model file (`src.model` / `tgt.model`).
//! - [`WordTokenizer`] is rule-based: it splits punctuation and English
//!   contractions.
//!
//! The [`Tokenize`] trait is the seam the corpus reader works against.
//!
//! # Example
//!
//! ```
//! use preparar::tokenizer::{Tokenize, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new();
//! let pieces = tokenizer.encode_pieces("Hello, world!").unwrap();
//! assert_eq!(pieces, ["Hello", ",", "world", "!"]);
//! ```

mod config;
mod error;
mod subword;
mod traits;
mod word;

pub use config::SpecialTokens;
pub use error::{Result, TokenizerError};
pub use subword::SubwordTokenizer;
pub use traits::Tokenize;
pub use word::WordTokenizer;

//! Corpus reader implementation.

use std::fs;
use std::path::Path;

use log::debug;

use super::error::Result;
use super::example::Corpus;
use super::side::Side;
use crate::tokenizer::{SpecialTokens, SubwordTokenizer, Tokenize, WordTokenizer};
use crate::util::human_bytes;

/// Reads newline-delimited corpus files with a tokenization strategy.
///
/// Generic over the tokenizer so both strategies share one reading path.
/// Construct via [`CorpusReader::subword`] or [`CorpusReader::word`], or use
/// the [`read_corpus`] / [`read_corpus_plain`] convenience functions.
#[derive(Debug, Clone)]
pub struct CorpusReader<T> {
    tokenizer: T,
    side: Side,
    special: SpecialTokens,
}

impl CorpusReader<SubwordTokenizer> {
    /// Reader using a pre-trained subword model resolved from `model_dir`.
    ///
    /// # Errors
    ///
    /// Fails when `{model_dir}/{side}.model` is missing, unparseable, or its
    /// vocabulary size differs from `vocab_size`.
    pub fn subword(model_dir: impl AsRef<Path>, side: Side, vocab_size: usize) -> Result<Self> {
        let tokenizer = SubwordTokenizer::for_side(model_dir, side, vocab_size)?;
        Ok(Self::with_tokenizer(tokenizer, side))
    }
}

impl CorpusReader<WordTokenizer> {
    /// Reader using the rule-based word tokenizer.
    #[must_use]
    pub fn word(side: Side) -> Self {
        Self::with_tokenizer(WordTokenizer::new(), side)
    }
}

impl<T: Tokenize> CorpusReader<T> {
    /// Reader using any tokenization strategy.
    #[must_use]
    pub fn with_tokenizer(tokenizer: T, side: Side) -> Self {
        Self { tokenizer, side, special: SpecialTokens::default() }
    }

    /// Get the side this reader tokenizes for.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Read and tokenize a corpus file, one sentence per line.
    ///
    /// Lines are kept in file order and blank lines are not skipped; they
    /// tokenize to an empty sentence (plus boundary tokens on the target
    /// side). Target-side sentences are wrapped as `<s> ... </s>`.
    ///
    /// # Errors
    ///
    /// - [`CorpusError::Io`](super::CorpusError::Io) when the file is missing,
    ///   unreadable, or not valid UTF-8.
    /// - [`CorpusError::Tokenize`](super::CorpusError::Tokenize) when the
    ///   tokenizer fails on a line. No partial corpus is returned.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Corpus> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        debug!("reading corpus {} ({})", path.display(), human_bytes(raw.len() as u64));

        let mut corpus = Corpus::with_capacity(raw.lines().count());
        for line in raw.lines() {
            let mut sentence = self.tokenizer.encode_pieces(line)?;
            if self.side.is_target() {
                sentence.insert(0, self.special.bos.clone());
                sentence.push(self.special.eos.clone());
            }
            corpus.push(sentence);
        }

        debug!("tokenized {} sentences from {}", corpus.len(), path.display());
        Ok(corpus)
    }
}

/// Read a corpus with the subword strategy.
///
/// Loads `{side}.model` from the current directory and checks it against
/// `vocab_size`. For an explicit model directory use [`CorpusReader::subword`].
///
/// # Errors
///
/// See [`CorpusReader::subword`] and [`CorpusReader::read`].
pub fn read_corpus(path: impl AsRef<Path>, side: Side, vocab_size: usize) -> Result<Corpus> {
    CorpusReader::subword(".", side, vocab_size)?.read(path)
}

/// Read a corpus with the word-tokenizer strategy.
///
/// # Errors
///
/// See [`CorpusReader::read`].
pub fn read_corpus_plain(path: impl AsRef<Path>, side: Side) -> Result<Corpus> {
    CorpusReader::word(side).read(path)
}

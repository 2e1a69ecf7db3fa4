//! Shared data shapes: tokens, sentences, and aligned examples.

/// A single token string (word or subword piece)
pub type Token = String;

/// An ordered sequence of tokens, one per sentence
pub type Sentence = Vec<Token>;

/// An ordered sequence of sentences, one per corpus line
pub type Corpus = Vec<Sentence>;

/// An aligned (source, target) sentence pair from two parallel corpora
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Source-side sentence
    pub source: Sentence,
    /// Target-side sentence
    pub target: Sentence,
}

impl Example {
    /// Create a new aligned example
    #[must_use]
    pub fn new(source: Sentence, target: Sentence) -> Self {
        Self { source, target }
    }

    /// Source sentence length in tokens (the batch sort key)
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }
}

//! Tokenizer trait definition.

use super::error::Result;

/// Tokenizer trait: encode a line of text into string pieces.
pub trait Tokenize: Send + Sync {
    /// Encode text into an ordered sequence of token strings.
    ///
    /// An empty line encodes to an empty sequence.
    fn encode_pieces(&self, text: &str) -> Result<Vec<String>>;
}

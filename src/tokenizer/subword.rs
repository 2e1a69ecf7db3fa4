//! Pre-trained subword tokenizer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, TokenizerError};
use super::traits::Tokenize;
use crate::corpus::Side;

/// Word-boundary marker prefixed to the first piece of every word.
const WORD_BOUNDARY: char = '▁';

/// Subword tokenizer backed by a pre-trained merge model.
///
/// Holds a piece vocabulary and ordered merge rules. Models are trained
/// offline; this crate only loads them and applies the merges. Encoding a
/// word starts from its characters (the first one carrying the `▁`
/// word-boundary marker) and replays every merge rule in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubwordTokenizer {
    /// Piece inventory
    vocab: Vec<String>,
    /// Merge rules (pair of pieces, applied in order)
    merges: Vec<(String, String)>,
}

impl SubwordTokenizer {
    /// Create a tokenizer from an existing piece vocabulary and merge rules.
    #[must_use]
    pub fn from_parts(vocab: Vec<String>, merges: Vec<(String, String)>) -> Self {
        Self { vocab, merges }
    }

    /// Load a model file for one corpus side.
    ///
    /// Resolves `{side}.model` (`src.model` / `tgt.model`) under `dir` and
    /// checks the model's vocabulary size against `vocab_size`.
    ///
    /// # Errors
    ///
    /// - [`TokenizerError::Io`] when the model file is missing or unreadable.
    /// - [`TokenizerError::Model`] when the file does not parse as a model.
    /// - [`TokenizerError::VocabMismatch`] when the model's vocabulary size
    ///   differs from `vocab_size`.
    pub fn for_side(dir: impl AsRef<Path>, side: Side, vocab_size: usize) -> Result<Self> {
        let path = dir.as_ref().join(side.model_file_name());
        let tokenizer = Self::load(&path)?;
        if tokenizer.vocab_size() != vocab_size {
            return Err(TokenizerError::VocabMismatch {
                expected: vocab_size,
                actual: tokenizer.vocab_size(),
            });
        }
        Ok(tokenizer)
    }

    /// Load a model from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| TokenizerError::Model {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save the model to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| TokenizerError::Model {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get vocabulary size
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Split one word into pieces: characters first, then merges in order.
    fn word_pieces(&self, word: &str) -> Vec<String> {
        let mut pieces: Vec<String> = word
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if i == 0 {
                    format!("{WORD_BOUNDARY}{c}")
                } else {
                    c.to_string()
                }
            })
            .collect();

        for (a, b) in &self.merges {
            let merged = format!("{a}{b}");
            let mut i = 0;
            while i < pieces.len().saturating_sub(1) {
                if &pieces[i] == a && &pieces[i + 1] == b {
                    pieces[i] = merged.clone();
                    pieces.remove(i + 1);
                } else {
                    i += 1;
                }
            }
        }
        pieces
    }
}

impl Tokenize for SubwordTokenizer {
    fn encode_pieces(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split_whitespace()
            .flat_map(|word| self.word_pieces(word))
            .collect())
    }
}

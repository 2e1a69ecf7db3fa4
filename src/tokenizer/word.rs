//! Rule-based word tokenizer.

use regex::Regex;

use super::error::Result;
use super::traits::Tokenize;

/// Contraction suffixes split off as their own tokens (`it's` → `it`, `'s`).
const CONTRACTIONS: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Word tokenizer: one token per word or punctuation mark.
///
/// Splits punctuation off word edges and separates English contractions, so
/// `"Don't panic!"` becomes `["Do", "n't", "panic", "!"]`. Word characters
/// follow Unicode rules, so accented and non-Latin scripts stay intact.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    token_re: Regex,
}

impl WordTokenizer {
    /// Create a word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        // Words with an inner apostrophe stay whole here and are split by the
        // contraction rules below; everything else is a word run or a single
        // punctuation mark.
        let token_re = Regex::new(r"\w+'\w+|\w+|[^\w\s]").expect("valid token pattern");
        Self { token_re }
    }

    /// Split a contraction into stem and suffix tokens.
    fn split_contraction(word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        if lower.len() == word.len() {
            if let Some(stem) = lower.strip_suffix("n't") {
                if !stem.is_empty() {
                    return vec![word[..stem.len()].to_string(), word[stem.len()..].to_string()];
                }
            }
            for suffix in CONTRACTIONS {
                if lower.ends_with(suffix) && lower.len() > suffix.len() {
                    let split = word.len() - suffix.len();
                    return vec![word[..split].to_string(), word[split..].to_string()];
                }
            }
        }
        vec![word.to_string()]
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenize for WordTokenizer {
    fn encode_pieces(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .token_re
            .find_iter(text)
            .flat_map(|m| {
                if m.as_str().contains('\'') {
                    Self::split_contraction(m.as_str())
                } else {
                    vec![m.as_str().to_string()]
                }
            })
            .collect())
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_word_tokens_contain_no_whitespace(text in ".{0,40}") {
            let tokenizer = WordTokenizer::new();
            let tokens = tokenizer.encode_pieces(&text).unwrap();
            for token in tokens {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.chars().any(char::is_whitespace));
            }
        }

        #[test]
        fn prop_word_tokenization_is_deterministic(text in "[a-zA-Z ,.!?']{0,40}") {
            let tokenizer = WordTokenizer::new();
            let first = tokenizer.encode_pieces(&text).unwrap();
            let second = tokenizer.encode_pieces(&text).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}

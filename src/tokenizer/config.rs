//! Special token configuration.

use serde::{Deserialize, Serialize};

/// Special tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// Unknown token
    pub unk: String,
    /// Beginning of sequence
    pub bos: String,
    /// End of sequence
    pub eos: String,
    /// Padding token
    pub pad: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            unk: "<unk>".to_string(),
            bos: "<s>".to_string(),
            eos: "</s>".to_string(),
            pad: "<pad>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_tokens_default() {
        let special = SpecialTokens::default();
        assert_eq!(special.unk, "<unk>");
        assert_eq!(special.bos, "<s>");
        assert_eq!(special.eos, "</s>");
        assert_eq!(special.pad, "<pad>");
    }

    #[test]
    fn test_special_tokens_serialize_json() {
        let special = SpecialTokens::default();
        let json = serde_json::to_string(&special).unwrap();
        let deserialized: SpecialTokens = serde_json::from_str(&json).unwrap();
        assert_eq!(special.bos, deserialized.bos);
        assert_eq!(special.eos, deserialized.eos);
    }
}

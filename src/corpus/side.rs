//! Corpus side indicator.

use serde::{Deserialize, Serialize};

/// Which language stream a corpus belongs to.
///
/// The side keys the subword model file name and controls boundary-token
/// wrapping: only target-side sentences get `<s>` / `</s>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Source language stream
    Source,
    /// Target language stream
    Target,
}

impl Side {
    /// Whether this is the target side.
    #[must_use]
    pub fn is_target(self) -> bool {
        matches!(self, Self::Target)
    }

    /// Model file name for this side (`src.model` / `tgt.model`).
    #[must_use]
    pub fn model_file_name(self) -> String {
        format!("{self}.model")
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "src"),
            Self::Target => write!(f, "tgt"),
        }
    }
}

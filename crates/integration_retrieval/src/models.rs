//! Retrieval data models

use serde::{Deserialize, Serialize};

/// A single retrieved context passage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Passage {
    /// Passage text
    pub text: String,

    /// Relevance score reported by the backend, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl Passage {
    /// Create a passage without a score
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score: None,
        }
    }
}

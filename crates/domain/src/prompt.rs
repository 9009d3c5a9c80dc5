//! Prompt composition
//!
//! Pure derivation of the input sent to the generation backend. Two
//! composition schemes exist and both are preserved as selectable pipeline
//! configurations rather than merged:
//!
//! - [`CompositionScheme::CharacterDirect`]: query and persona tag reach
//!   generation as separate fields, untouched.
//! - [`CompositionScheme::ContextFused`]: retrieved passages are fused with
//!   the query and persona tag into a single steering string.

use serde::{Deserialize, Serialize};

/// How the generation input is assembled from a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionScheme {
    /// Query and persona tag pass through unmodified as separate fields
    #[default]
    CharacterDirect,
    /// Query, retrieved passages, and persona tag are fused into one string
    ContextFused,
}

/// The derived input actually sent to the generation backend
///
/// Derived deterministically from a turn and its retrieved context; carries
/// no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    /// Raw user query, always forwarded unmodified
    pub query: String,
    /// Steering input: the persona tag under `CharacterDirect`, the fused
    /// query/context/persona string under `ContextFused`
    pub steering: String,
}

impl ComposedPrompt {
    /// Compose the generation input for the given scheme
    pub fn compose(
        scheme: CompositionScheme,
        query: &str,
        passages: &[String],
        character: &str,
    ) -> Self {
        match scheme {
            CompositionScheme::CharacterDirect => Self::character_direct(query, character),
            CompositionScheme::ContextFused => Self::context_fused(query, passages, character),
        }
    }

    /// Scheme with no context fusion: both fields pass through untouched
    pub fn character_direct(query: &str, character: &str) -> Self {
        Self {
            query: query.to_owned(),
            steering: character.to_owned(),
        }
    }

    /// Context-fused scheme: `query + " " + join(passages, " ") + " " + character`
    ///
    /// Passage order is preserved and nothing is deduplicated. An empty
    /// passage list still contributes its separators, so an empty list and
    /// empty tag leave `"{query}  "`.
    pub fn context_fused(query: &str, passages: &[String], character: &str) -> Self {
        let steering = format!("{} {} {}", query, passages.join(" "), character);
        Self {
            query: query.to_owned(),
            steering,
        }
    }
}

/// Composite query handed to the retrieval backend: the persona tag
/// concatenated directly with the user query.
pub fn retrieval_query(character: &str, query: &str) -> String {
    format!("{character}{query}")
}

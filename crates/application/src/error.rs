//! Application-level errors
//!
//! A closed enumeration of failure kinds, one per pipeline stage, so each
//! kind maps to exactly one handling policy instead of a catch-all.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (request rejected before any backend call)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Retrieval backend error
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Generation backend error
    #[error("Generation error: {0}")]
    Generation(String),

    /// Speech synthesis backend error
    #[error("Synthesis error: {0}")]
    Synthesis(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether this failure terminates a turn
    ///
    /// Synthesis is the single best-effort stage: the turn still succeeds
    /// without audio. Every other kind is fatal.
    pub const fn is_fatal_to_turn(&self) -> bool {
        !matches!(self, Self::Synthesis(_))
    }
}

//! Generation port - Interface to the text-generation backend

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Generated reply text
    pub reply: String,
    /// Model used for generation
    pub model: String,
    /// Number of tokens used (if reported)
    pub tokens_used: Option<u32>,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Port for generation operations
///
/// `steering` is the second composition field: the persona tag under the
/// character-direct scheme, the fused query/context/persona string under the
/// context-fused scheme. It may be empty.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Generate a reply for a query with the given steering input
    async fn generate(
        &self,
        query: &str,
        steering: &str,
    ) -> Result<GenerationResult, ApplicationError>;

    /// Check if the generation backend is healthy
    async fn is_healthy(&self) -> bool;

    /// Name of the model in use
    fn model_name(&self) -> String;
}

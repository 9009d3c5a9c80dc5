//! Retrieval port - Interface to the passage-retrieval backend

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for context retrieval
///
/// Implementations return passages in backend order; callers rely on that
/// order being preserved. An empty result is a valid outcome, not an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RetrievalPort: Send + Sync {
    /// Retrieve context passages for a composite query
    async fn retrieve(&self, query: &str) -> Result<Vec<String>, ApplicationError>;

    /// Check if the retrieval backend is reachable
    async fn is_available(&self) -> bool;
}

//! Retrieval adapter - Implements RetrievalPort using integration_retrieval

use std::sync::Arc;

use application::{error::ApplicationError, ports::RetrievalPort};
use async_trait::async_trait;
use integration_retrieval::{RetrievalClient, RetrievalConfig, RetrievalError};
use tracing::{debug, instrument};

/// Adapter for the passage-retrieval service
#[derive(Debug)]
pub struct RetrievalAdapter {
    client: Arc<RetrievalClient>,
}

impl RetrievalAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: RetrievalConfig) -> Result<Self, ApplicationError> {
        let client = RetrievalClient::new_shared(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map retrieval client error to application error
    fn map_error(err: RetrievalError) -> ApplicationError {
        ApplicationError::Retrieval(err.to_string())
    }
}

#[async_trait]
impl RetrievalPort for RetrievalAdapter {
    #[instrument(skip(self), fields(query_len = query.len()))]
    async fn retrieve(&self, query: &str) -> Result<Vec<String>, ApplicationError> {
        let passages = self
            .client
            .retrieve(query)
            .await
            .map_err(Self::map_error)?;

        debug!(passages = passages.len(), "Retrieved context passages");

        // Order is significant downstream; map without reordering.
        Ok(passages.into_iter().map(|p| p.text).collect())
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_adapter() {
        let adapter = RetrievalAdapter::new(RetrievalConfig::default());
        assert!(adapter.is_ok());
    }

    #[test]
    fn map_error_produces_retrieval_kind() {
        let err = RetrievalAdapter::map_error(RetrievalError::ServerError("500".to_string()));
        assert!(matches!(err, ApplicationError::Retrieval(_)));

        let err = RetrievalAdapter::map_error(RetrievalError::Timeout { timeout_secs: 30 });
        assert!(matches!(err, ApplicationError::Retrieval(_)));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RetrievalAdapter>();
    }
}

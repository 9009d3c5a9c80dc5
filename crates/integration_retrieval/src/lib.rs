#![forbid(unsafe_code)]
//! Passage retrieval integration for PersonaRelay
//!
//! HTTP client for the passage-retrieval service that backs the
//! retrieval-augmented pipeline. Given a composite query, the service
//! returns an ordered list of context passages; their order is significant
//! downstream and is preserved here untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_retrieval::{RetrievalClient, RetrievalConfig};
//!
//! let client = RetrievalClient::new(RetrievalConfig::default())?;
//! let passages = client.retrieve("活泼你好").await?;
//! for passage in passages {
//!     println!("{}", passage.text);
//! }
//! ```

mod config;
mod error;
mod models;

pub use config::RetrievalConfig;
pub use error::RetrievalError;
pub use models::Passage;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// HTTP client for the passage-retrieval service
#[derive(Debug)]
pub struct RetrievalClient {
    client: Client,
    config: RetrievalConfig,
}

/// Retrieval request body
#[derive(Debug, Serialize)]
struct RetrieveRequest<'a> {
    query: &'a str,
    top_k: usize,
}

/// Retrieval response body
#[derive(Debug, Deserialize)]
struct RetrieveResponse {
    passages: Vec<Passage>,
}

impl RetrievalClient {
    /// Create a new retrieval client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: RetrievalConfig) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RetrievalError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a shareable client wrapped in Arc
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new_shared(config: RetrievalConfig) -> Result<Arc<Self>, RetrievalError> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// Build the retrieve endpoint URL
    fn retrieve_url(&self) -> String {
        format!("{}/retrieve", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the health endpoint URL
    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url.trim_end_matches('/'))
    }

    /// Retrieve context passages for a composite query
    ///
    /// Returns zero or more passages in backend order. An empty list is a
    /// valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`RetrievalError`] for connection problems, non-success
    /// statuses, or unparseable bodies.
    #[instrument(skip(self), fields(query_len = query.len()))]
    pub async fn retrieve(&self, query: &str) -> Result<Vec<Passage>, RetrievalError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RetrievalError::InvalidQuery(
                "Retrieval query cannot be empty".to_string(),
            ));
        }

        let body = RetrieveRequest {
            query,
            top_k: self.config.top_k,
        };

        debug!("Sending retrieval request");

        let response = self
            .client
            .post(self.retrieve_url())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RetrievalError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let parsed: RetrieveResponse = response
            .json()
            .await
            .map_err(|e| RetrievalError::ParseError(e.to_string()))?;

        debug!(passages = parsed.passages.len(), "Retrieved passages");

        Ok(parsed.passages)
    }

    /// Check whether the retrieval service is reachable
    pub async fn is_healthy(&self) -> bool {
        self.client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map(|resp| resp.status().is_success())
            .unwrap_or(false)
    }
}

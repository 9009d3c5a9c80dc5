//! Retrieval error types

use thiserror::Error;

/// Errors that can occur during retrieval operations
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Connection to the retrieval service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the retrieval service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("Server error: {0}")]
    ServerError(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Query is invalid or empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl From<reqwest::Error> for RetrievalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs: 30 }
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

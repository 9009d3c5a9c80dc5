//! Generation errors

use thiserror::Error;

/// Errors that can occur while calling the generation backend
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Failed to connect to the generation server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the generation server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("Server error: {0}")]
    ServerError(String),

    /// Response body could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend produced a reply with no content
    #[error("Empty reply from model {0}")]
    EmptyReply(String),

    /// Timeout during generation
    #[error("Generation timeout after {0}ms")]
    Timeout(u64),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

//! API error handling
//!
//! Every failure leaves the process as a status code plus a single
//! human-readable `detail` string; backend-specific structure never crosses
//! the HTTP boundary.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request rejected before any backend call
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Turn failed inside the pipeline
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure message
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Retrieval(_)
            | ApplicationError::Generation(_)
            | ApplicationError::Synthesis(_)
            | ApplicationError::Configuration(_)
            | ApplicationError::Internal(_) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    #[test]
    fn bad_request_message() {
        let err = ApiError::BadRequest("missing query".to_string());
        assert_eq!(err.to_string(), "Bad request: missing query");
    }

    #[test]
    fn domain_error_converts_to_bad_request() {
        let source = ApplicationError::Domain(DomainError::EmptyQuery);
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::BadRequest(_)));
    }

    #[test]
    fn retrieval_error_converts_to_internal() {
        let source = ApplicationError::Retrieval("index offline".to_string());
        let result: ApiError = source.into();
        let ApiError::Internal(msg) = result else {
            unreachable!("Expected Internal");
        };
        assert!(msg.contains("index offline"));
    }

    #[test]
    fn generation_error_converts_to_internal() {
        let source = ApplicationError::Generation("model down".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::Internal(_)));
    }

    #[test]
    fn into_response_bad_request() {
        let response = ApiError::BadRequest("invalid".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_internal() {
        let response = ApiError::Internal("crash".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_serializes_detail_only() {
        let resp = ErrorResponse {
            detail: "Generation error: model down".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"detail":"Generation error: model down"}"#);
    }
}

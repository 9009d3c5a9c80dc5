//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A turn arrived without a usable query
    #[error("Query must not be empty")]
    EmptyQuery,
}

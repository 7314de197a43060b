//! Application-level errors

use std::time::Duration;

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The weather provider does not know the location
    #[error("Location not found: {0}")]
    NotFound(String),

    /// External service error (network, unexpected status, bad payload)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Credentials rejected by the provider
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// The call did not finish in time
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

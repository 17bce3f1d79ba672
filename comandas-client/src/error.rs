//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a usable response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response arrived but its shape is unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credentials rejected; carries the notice shown to the user
    #[error("{0}")]
    Unauthorized(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (local form rules or a 400 from the BFF)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side failure (5xx and anything unclassified)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A login call arrived while another was still in flight
    #[error("Login already in progress")]
    LoginInProgress,
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

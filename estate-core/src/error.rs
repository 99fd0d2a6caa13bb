//! Error types for estate services

use thiserror::Error;

/// Service-level errors shared by every back-office and trust service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Bad or missing required input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unique content hash or key already present
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Malformed key or signature material
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Signing could not be completed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Operation on a missing id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    /// Stable machine-readable code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Duplicate(_) => "DUPLICATE",
            Self::Crypto(_) => "CRYPTO_ERROR",
            Self::Signing(_) => "SIGNING_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Whether the caller supplied something wrong (as opposed to an internal failure)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

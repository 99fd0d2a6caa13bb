//! Error types for the signer

use thiserror::Error;

/// Signer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type for signer operations
pub type SignerResult<T> = Result<T, SignerError>;

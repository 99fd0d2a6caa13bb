//! Logging Standards and Conventions
//!
//! Every crate in the workspace logs through `tracing` and follows these
//! conventions so that request logs stay greppable.
//!
//! # Log Levels
//!
//! | Level | Usage | Examples |
//! |-------|-------|----------|
//! | ERROR | Storage failures, broken invariants | Unique index out of sync |
//! | WARN  | Rejected or failed trust operations | Signature invalid, biometric mismatch |
//! | INFO  | State transitions | Signature verified, enrollment deactivated |
//! | DEBUG | Operation parameters | Record ids, payload sizes |
//! | TRACE | Full payloads | Never used for biometric data |
//!
//! # Structured Logging Fields
//!
//! Always use structured fields for key information:
//! - `operation`: one of [`operations`]
//! - `signature_id` / `timestamp_id` / `biometric_id`: record ids
//! - `user_id`, `signer_id`, `contract_id`: owning entities
//! - `error`: error message
//!
//! ```ignore
//! use estate_core::logging::operations;
//!
//! tracing::warn!(
//!     signature_id = id,
//!     operation = operations::VERIFY_SIGNATURE,
//!     "Signature expired"
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Log level enumeration matching tracing levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parse from string, accepting `warning` as an alias
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operation names used in the `operation` field
pub mod operations {
    // Signatures
    pub const CREATE_SIGNATURE: &str = "create_signature";
    pub const VERIFY_SIGNATURE: &str = "verify_signature";
    pub const REVOKE_SIGNATURE: &str = "revoke_signature";

    // Timestamps
    pub const CREATE_TIMESTAMP: &str = "create_timestamp";
    pub const VERIFY_TIMESTAMP: &str = "verify_timestamp";
    pub const DELETE_TIMESTAMP: &str = "delete_timestamp";
    pub const UPDATE_TIMESTAMP_STATUS: &str = "update_timestamp_status";

    // Biometric enrollment
    pub const REGISTER_BIOMETRIC: &str = "register_biometric";
    pub const AUTHENTICATE_BIOMETRIC: &str = "authenticate_biometric";
    pub const EVALUATE_QUALITY: &str = "evaluate_quality";
    pub const DEACTIVATE_BIOMETRIC: &str = "deactivate_biometric";
    pub const DELETE_BIOMETRIC: &str = "delete_biometric";

    // Back-office records
    pub const CREATE: &str = "create";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
    pub const SEARCH: &str = "search";
    pub const SEED: &str = "seed";
}

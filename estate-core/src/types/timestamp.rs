//! Digital timestamp types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Kind of document a timestamp was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimestampedDocumentType {
    Contract,
    Agreement,
    Consent,
    Notice,
    Application,
    Signature,
    Biometric,
    Other,
}

impl TimestampedDocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "CONTRACT",
            Self::Agreement => "AGREEMENT",
            Self::Consent => "CONSENT",
            Self::Notice => "NOTICE",
            Self::Application => "APPLICATION",
            Self::Signature => "SIGNATURE",
            Self::Biometric => "BIOMETRIC",
            Self::Other => "OTHER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimestampStatus {
    #[default]
    Active,
    Expired,
    Revoked,
    Invalid,
}

impl TimestampStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Revoked => "REVOKED",
            Self::Invalid => "INVALID",
        }
    }
}

/// Persisted timestamp issued by a timestamp authority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampRecord {
    pub id: RecordId,
    pub document_id: u64,
    pub document_type: TimestampedDocumentType,
    pub timestamp_at: DateTime<Utc>,
    pub timestamp_certificate: String,
    /// Base64 SHA-256 over the issuance fields, unique across all timestamps
    pub timestamp_hash: String,
    pub timestamp_authority: String,
    pub authority_certificate: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub status: TimestampStatus,
    pub verification_result: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Issuance request for a new timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTimestamp {
    pub document_id: u64,
    pub document_type: TimestampedDocumentType,
    pub timestamp_certificate: String,
    pub timestamp_authority: String,
    #[serde(default)]
    pub authority_certificate: Option<String>,
    /// Defaults to ten years after issuance
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

//! Document signature types
//!
//! A signature record captures one signer's Ed25519 signature over the
//! digest of a contract document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Kind of document being signed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignedDocumentType {
    Contract,
    Agreement,
    Consent,
    Notice,
    Application,
    Other,
}

impl SignedDocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "CONTRACT",
            Self::Agreement => "AGREEMENT",
            Self::Consent => "CONSENT",
            Self::Notice => "NOTICE",
            Self::Application => "APPLICATION",
            Self::Other => "OTHER",
        }
    }
}

/// Signature lifecycle
///
/// PENDING -> SIGNED -> VERIFIED, any -> REVOKED,
/// SIGNED/VERIFIED -> EXPIRED once expiry is observed at verify time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignatureStatus {
    #[default]
    Pending,
    Signed,
    Verified,
    Expired,
    Revoked,
    Invalid,
}

impl SignatureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Signed => "SIGNED",
            Self::Verified => "VERIFIED",
            Self::Expired => "EXPIRED",
            Self::Revoked => "REVOKED",
            Self::Invalid => "INVALID",
        }
    }

    /// Only signed or already verified signatures may be (re)verified
    pub fn is_verifiable(&self) -> bool {
        matches!(self, Self::Signed | Self::Verified)
    }
}

/// Persisted document signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub id: RecordId,
    pub signer_id: u64,
    pub signer_name: String,
    pub contract_id: u64,
    pub document_type: SignedDocumentType,
    /// Base64 signature blob
    pub signature_data: String,
    /// Base64 SHA-256 of `signature_data`, unique across all signatures
    pub signature_hash: String,
    pub signed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: SignatureStatus,
    pub verification_result: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SignatureRecord {
    /// Check whether the validity period has passed at `at`
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        at > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&SignatureStatus::Verified).unwrap();
        assert_eq!(json, "\"VERIFIED\"");
        let parsed: SignedDocumentType = serde_json::from_str("\"APPLICATION\"").unwrap();
        assert_eq!(parsed, SignedDocumentType::Application);
    }

    #[test]
    fn test_verifiable_states() {
        assert!(SignatureStatus::Signed.is_verifiable());
        assert!(SignatureStatus::Verified.is_verifiable());
        assert!(!SignatureStatus::Pending.is_verifiable());
        assert!(!SignatureStatus::Revoked.is_verifiable());
        assert!(!SignatureStatus::Expired.is_verifiable());
    }
}

//! Data Transfer Objects for API requests and responses
//!
//! Record types from `estate_core` serialize directly; only requests and
//! the outcome envelopes for verify/revoke style calls live here.

use chrono::{DateTime, Utc};
use estate_core::{BiometricType, QualityLevel, RecordId, SignedDocumentType};
use serde::{Deserialize, Serialize};

// ============ Signature DTOs ============

/// Sign a document request
#[derive(Debug, Deserialize)]
pub struct CreateSignatureRequest {
    pub signer_id: u64,
    pub signer_name: String,
    pub contract_id: u64,
    pub document_type: SignedDocumentType,
    /// Document text; its SHA-256 digest is what gets signed
    pub document_content: String,
    /// Ed25519 private key (base64 seed or PKCS#8 DER)
    #[serde(alias = "private_key_base64")]
    pub private_key: String,
}

/// Verify a stored signature request
#[derive(Debug, Deserialize)]
pub struct VerifySignatureRequest {
    pub document_content: String,
    /// Ed25519 public key (base64 raw or SPKI DER)
    #[serde(alias = "public_key_base64")]
    pub public_key: String,
}

/// Outcome of a verification
#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    pub id: RecordId,
    pub valid: bool,
    pub message: String,
}

/// Outcome of a state transition (revoke, deactivate, delete)
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(success: bool, done: &str, missed: &str) -> Self {
        Self {
            success,
            message: if success { done } else { missed }.to_string(),
        }
    }
}

// ============ Biometric DTOs ============

/// Enroll a biometric payload
#[derive(Debug, Deserialize)]
pub struct RegisterBiometricRequest {
    pub user_id: u64,
    pub user_name: String,
    pub biometric_type: BiometricType,
    /// Raw payload, base64
    #[serde(alias = "biometric_data_base64")]
    pub biometric_data: String,
}

/// Match a probe payload against a user's enrollments
#[derive(Debug, Deserialize)]
pub struct AuthenticateBiometricRequest {
    pub user_id: u64,
    pub biometric_type: BiometricType,
    #[serde(alias = "biometric_data_base64")]
    pub biometric_data: String,
}

#[derive(Debug, Serialize)]
pub struct AuthenticationResponse {
    pub authenticated: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateQualityRequest {
    #[serde(alias = "biometric_data_base64")]
    pub biometric_data: String,
}

#[derive(Debug, Serialize)]
pub struct QualityResponse {
    pub quality_score: u8,
    pub quality_level: QualityLevel,
    pub message: String,
}

// ============ Query DTOs ============

/// Free-text search parameter
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

/// Expiring-contracts horizon; defaults to 30 days from now
#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    pub before: Option<DateTime<Utc>>,
}

// ============ Health DTOs ============

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

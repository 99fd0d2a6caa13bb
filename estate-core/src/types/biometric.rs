//! Biometric enrollment types
//!
//! Enrollment stores the raw base64 payload and its SHA-256 digest. Matching
//! is exact digest equality; there is no tolerance for sensor noise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::constants::MAX_QUALITY_SCORE;

/// Enrolled biometric modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiometricType {
    FingerprintLeftThumb,
    FingerprintLeftIndex,
    FingerprintLeftMiddle,
    FingerprintLeftRing,
    FingerprintLeftPinky,
    FingerprintRightThumb,
    FingerprintRightIndex,
    FingerprintRightMiddle,
    FingerprintRightRing,
    FingerprintRightPinky,
    PalmPrintLeft,
    PalmPrintRight,
    FaceRecognition,
    IrisScan,
    VoicePrint,
}

impl BiometricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FingerprintLeftThumb => "FINGERPRINT_LEFT_THUMB",
            Self::FingerprintLeftIndex => "FINGERPRINT_LEFT_INDEX",
            Self::FingerprintLeftMiddle => "FINGERPRINT_LEFT_MIDDLE",
            Self::FingerprintLeftRing => "FINGERPRINT_LEFT_RING",
            Self::FingerprintLeftPinky => "FINGERPRINT_LEFT_PINKY",
            Self::FingerprintRightThumb => "FINGERPRINT_RIGHT_THUMB",
            Self::FingerprintRightIndex => "FINGERPRINT_RIGHT_INDEX",
            Self::FingerprintRightMiddle => "FINGERPRINT_RIGHT_MIDDLE",
            Self::FingerprintRightRing => "FINGERPRINT_RIGHT_RING",
            Self::FingerprintRightPinky => "FINGERPRINT_RIGHT_PINKY",
            Self::PalmPrintLeft => "PALM_PRINT_LEFT",
            Self::PalmPrintRight => "PALM_PRINT_RIGHT",
            Self::FaceRecognition => "FACE_RECOGNITION",
            Self::IrisScan => "IRIS_SCAN",
            Self::VoicePrint => "VOICE_PRINT",
        }
    }

    pub fn is_fingerprint(&self) -> bool {
        !matches!(
            self,
            Self::PalmPrintLeft
                | Self::PalmPrintRight
                | Self::FaceRecognition
                | Self::IrisScan
                | Self::VoicePrint
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiometricStatus {
    #[default]
    Active,
    Inactive,
    Expired,
    Suspended,
    Deleted,
}

impl BiometricStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Expired => "EXPIRED",
            Self::Suspended => "SUSPENDED",
            Self::Deleted => "DELETED",
        }
    }
}

/// Coarse bucket for a quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Unacceptable,
}

impl QualityLevel {
    /// Bucket a 0-100 score
    pub fn from_score(score: u8) -> Self {
        match score.min(MAX_QUALITY_SCORE) {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            20..=39 => Self::Poor,
            _ => Self::Unacceptable,
        }
    }
}

/// Persisted biometric enrollment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricRecord {
    pub id: RecordId,
    pub user_id: u64,
    pub user_name: String,
    pub biometric_type: BiometricType,
    /// Raw base64 payload as submitted at enrollment
    pub biometric_data: String,
    /// Base64 SHA-256 of `biometric_data`, unique across all enrollments
    pub biometric_hash: String,
    pub quality_score: u8,
    pub registered_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
    pub status: BiometricStatus,
    pub verification_result: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_level_buckets() {
        assert_eq!(QualityLevel::from_score(100), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_score(80), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_score(79), QualityLevel::Good);
        assert_eq!(QualityLevel::from_score(50), QualityLevel::Fair);
        assert_eq!(QualityLevel::from_score(30), QualityLevel::Poor);
        assert_eq!(QualityLevel::from_score(0), QualityLevel::Unacceptable);
    }

    #[test]
    fn test_biometric_type_wire_format() {
        let json = serde_json::to_string(&BiometricType::FingerprintRightIndex).unwrap();
        assert_eq!(json, "\"FINGERPRINT_RIGHT_INDEX\"");
        assert_eq!(
            BiometricType::FingerprintRightIndex.as_str(),
            "FINGERPRINT_RIGHT_INDEX"
        );
        assert!(BiometricType::FingerprintLeftPinky.is_fingerprint());
        assert!(!BiometricType::IrisScan.is_fingerprint());
    }
}

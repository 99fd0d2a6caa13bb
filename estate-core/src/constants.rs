//! Back-office Constants
//!
//! Validity periods, quality thresholds and other fixed values used by the
//! document-integrity services.
//!
//! # Categories
//!
//! - **Validity**: How long issued records stay valid
//! - **Quality**: Biometric quality heuristic thresholds
//! - **Verification**: Result strings persisted on records

use chrono::{DateTime, Duration, Months, Utc};

// ============================================================================
// Validity Periods
// ============================================================================

/// Document signatures stay valid for 10 years after signing
pub const SIGNATURE_VALIDITY_YEARS: u32 = 10;

/// Timestamps default to a 10 year validity when no expiry is supplied
pub const TIMESTAMP_VALIDITY_YEARS: u32 = 10;

/// Biometric enrollments expire 5 years after registration
pub const BIOMETRIC_VALIDITY_YEARS: u32 = 5;

// ============================================================================
// Biometric Quality Heuristic
// ============================================================================

/// Payloads larger than this earn the base size bonus
pub const QUALITY_SIZE_THRESHOLD_BYTES: usize = 1000;

/// Payloads larger than this earn the high-resolution bonus
pub const QUALITY_HIGH_RES_THRESHOLD_BYTES: usize = 5000;

/// Minimum payload size for the consistency check to pass
pub const QUALITY_MIN_CONSISTENT_BYTES: usize = 100;

/// Score awarded for exceeding the size threshold
pub const QUALITY_SIZE_BONUS: u8 = 30;

/// Score awarded for exceeding the high-resolution threshold
pub const QUALITY_HIGH_RES_BONUS: u8 = 20;

/// Score awarded when the consistency check passes
pub const QUALITY_CONSISTENCY_BONUS: u8 = 50;

/// Upper bound of the quality score
pub const MAX_QUALITY_SCORE: u8 = 100;

// ============================================================================
// Verification Results
// ============================================================================

/// Stored on a record after a successful verification
pub const VERIFICATION_VERIFIED: &str = "VERIFIED";

/// Stored on a record after a failed verification
pub const VERIFICATION_INVALID: &str = "INVALID";

/// Calendar-aware "N years after" helper.
pub fn years_after(at: DateTime<Utc>, years: u32) -> DateTime<Utc> {
    at.checked_add_months(Months::new(years * 12))
        .unwrap_or_else(|| at + Duration::days(365 * i64::from(years)))
}

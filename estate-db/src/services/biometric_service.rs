//! Biometric Enrollment Service
//!
//! Enrollment keeps the submitted base64 payload and its digest. Matching is
//! exact digest equality against the user's ACTIVE enrollments of the same
//! type; there is no fuzzy comparison.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use estate_core::logging::operations;
use estate_core::{
    constants::{
        BIOMETRIC_VALIDITY_YEARS, MAX_QUALITY_SCORE, QUALITY_CONSISTENCY_BONUS,
        QUALITY_HIGH_RES_BONUS, QUALITY_HIGH_RES_THRESHOLD_BYTES, QUALITY_MIN_CONSISTENT_BYTES,
        QUALITY_SIZE_BONUS, QUALITY_SIZE_THRESHOLD_BYTES,
    },
    years_after, BiometricRecord, BiometricStatus, BiometricType, QualityLevel, RecordId,
    ServiceError, ServiceResult,
};
use estate_signer::digest::hash_str;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::entities::keys;
use crate::repos::Database;
use crate::store::Store;

/// Heuristic 0-100 score from the decoded payload size; undecodable input scores 0
pub fn evaluate_quality(raw_b64: &str) -> u8 {
    let Ok(bytes) = BASE64.decode(raw_b64.trim()) else {
        return 0;
    };
    let size = bytes.len();

    let mut score: u8 = 0;
    if size > QUALITY_SIZE_THRESHOLD_BYTES {
        score += QUALITY_SIZE_BONUS;
        if size > QUALITY_HIGH_RES_THRESHOLD_BYTES {
            score += QUALITY_HIGH_RES_BONUS;
        }
    }
    if size >= QUALITY_MIN_CONSISTENT_BYTES {
        score += QUALITY_CONSISTENCY_BONUS;
    }

    score.min(MAX_QUALITY_SCORE)
}

/// Bucket a score into a [`QualityLevel`]
pub fn quality_level(score: u8) -> QualityLevel {
    QualityLevel::from_score(score)
}

/// Biometric Enrollment Service
pub struct BiometricService {
    db: Arc<Database>,
}

impl BiometricService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn evaluate_quality(&self, raw_b64: &str) -> u8 {
        let score = evaluate_quality(raw_b64);
        debug!(score, operation = operations::EVALUATE_QUALITY, "Quality evaluated");
        score
    }

    /// Enroll a new biometric payload for a user
    pub async fn register(
        &self,
        user_id: u64,
        user_name: &str,
        biometric_type: BiometricType,
        raw_b64: &str,
        quality_score: u8,
    ) -> ServiceResult<BiometricRecord> {
        if raw_b64.trim().is_empty() {
            return Err(ServiceError::Validation("biometric payload is empty".to_string()));
        }
        if quality_score > MAX_QUALITY_SCORE {
            return Err(ServiceError::Validation(format!(
                "quality_score {} exceeds {}",
                quality_score, MAX_QUALITY_SCORE
            )));
        }

        let biometric_hash = hash_str(raw_b64);
        if self
            .db
            .biometrics
            .exists_by(keys::BIOMETRIC_HASH, &biometric_hash)
            .await?
        {
            warn!(
                user_id,
                operation = operations::REGISTER_BIOMETRIC,
                "Biometric payload already enrolled"
            );
            return Err(ServiceError::Duplicate(
                "biometric data already registered".to_string(),
            ));
        }

        let now = Utc::now();
        let record = BiometricRecord {
            id: 0,
            user_id,
            user_name: user_name.to_string(),
            biometric_type,
            biometric_data: raw_b64.to_string(),
            biometric_hash,
            quality_score,
            registered_at: now,
            last_used_at: None,
            expires_at: years_after(now, BIOMETRIC_VALIDITY_YEARS),
            status: BiometricStatus::Active,
            verification_result: None,
            created_at: now,
            updated_at: now,
        };

        let saved = self.db.biometrics.save(record).await?;
        info!(
            biometric_id = saved.id,
            user_id,
            biometric_type = biometric_type.as_str(),
            quality_score,
            operation = operations::REGISTER_BIOMETRIC,
            "Biometric enrolled"
        );
        Ok(saved)
    }

    /// Exact-match authentication against the user's ACTIVE enrollments
    pub async fn authenticate(
        &self,
        user_id: u64,
        biometric_type: BiometricType,
        raw_b64: &str,
    ) -> ServiceResult<bool> {
        let probe = hash_str(raw_b64);
        let candidates = self
            .db
            .biometrics
            .find_where(&|b: &BiometricRecord| {
                b.user_id == user_id
                    && b.biometric_type == biometric_type
                    && b.status == BiometricStatus::Active
            })
            .await?;

        let Some(matched) = candidates.into_iter().find(|b| b.biometric_hash == probe) else {
            warn!(
                user_id,
                biometric_type = biometric_type.as_str(),
                operation = operations::AUTHENTICATE_BIOMETRIC,
                "Biometric authentication failed"
            );
            return Ok(false);
        };

        let biometric_id = matched.id;
        let used_at = Utc::now();
        self.db
            .biometrics
            .update(
                biometric_id,
                Box::new(move |r: &mut BiometricRecord| r.last_used_at = Some(used_at)),
            )
            .await?;
        info!(
            biometric_id,
            user_id,
            operation = operations::AUTHENTICATE_BIOMETRIC,
            "Biometric authenticated"
        );
        Ok(true)
    }

    pub async fn list_by_user(&self, user_id: u64) -> ServiceResult<Vec<BiometricRecord>> {
        Ok(self
            .db
            .biometrics
            .find_where(&|b: &BiometricRecord| b.user_id == user_id)
            .await?)
    }

    pub async fn get_biometric(
        &self,
        biometric_id: RecordId,
    ) -> ServiceResult<Option<BiometricRecord>> {
        Ok(self.db.biometrics.find_by_id(biometric_id).await?)
    }

    /// Soft transition to INACTIVE
    pub async fn deactivate(&self, biometric_id: RecordId) -> ServiceResult<bool> {
        self.transition(biometric_id, BiometricStatus::Inactive, operations::DEACTIVATE_BIOMETRIC)
            .await
    }

    /// Soft delete; the row stays with status DELETED
    pub async fn delete(&self, biometric_id: RecordId) -> ServiceResult<bool> {
        self.transition(biometric_id, BiometricStatus::Deleted, operations::DELETE_BIOMETRIC)
            .await
    }

    async fn transition(
        &self,
        biometric_id: RecordId,
        status: BiometricStatus,
        operation: &'static str,
    ) -> ServiceResult<bool> {
        let updated = self
            .db
            .biometrics
            .update(
                biometric_id,
                Box::new(move |r: &mut BiometricRecord| r.status = status),
            )
            .await?;
        if updated.is_none() {
            return Ok(false);
        }

        info!(biometric_id, status = status.as_str(), operation, "Biometric status changed");
        Ok(true)
    }
}

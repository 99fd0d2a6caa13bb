//! Digital Timestamp Service

use chrono::Utc;
use estate_core::logging::operations;
use estate_core::{
    constants::TIMESTAMP_VALIDITY_YEARS, years_after, NewTimestamp, RecordId, ServiceError,
    ServiceResult, TimestampRecord, TimestampStatus, TimestampedDocumentType,
};
use estate_signer::digest::hash_fields;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::entities::keys;
use crate::repos::Database;
use crate::store::Store;

/// Digital Timestamp Service
pub struct TimestampService {
    db: Arc<Database>,
}

impl TimestampService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Issue a timestamp for a document
    pub async fn create_timestamp(&self, request: NewTimestamp) -> ServiceResult<TimestampRecord> {
        if request.timestamp_authority.trim().is_empty() {
            return Err(ServiceError::Validation(
                "timestamp_authority is required".to_string(),
            ));
        }
        if request.timestamp_certificate.is_empty() {
            return Err(ServiceError::Validation(
                "timestamp_certificate is required".to_string(),
            ));
        }

        let now = Utc::now();
        let document_id = request.document_id.to_string();
        let issued_at = now.to_rfc3339();
        let timestamp_hash = hash_fields(&[
            document_id.as_str(),
            request.document_type.as_str(),
            request.timestamp_certificate.as_str(),
            request.timestamp_authority.as_str(),
            issued_at.as_str(),
        ]);

        if self
            .db
            .timestamps
            .exists_by(keys::TIMESTAMP_HASH, &timestamp_hash)
            .await?
        {
            return Err(ServiceError::Duplicate(
                "timestamp already issued".to_string(),
            ));
        }

        let record = TimestampRecord {
            id: 0,
            document_id: request.document_id,
            document_type: request.document_type,
            timestamp_at: now,
            timestamp_certificate: request.timestamp_certificate,
            timestamp_hash,
            timestamp_authority: request.timestamp_authority,
            authority_certificate: request.authority_certificate,
            expires_at: request
                .expires_at
                .unwrap_or_else(|| years_after(now, TIMESTAMP_VALIDITY_YEARS)),
            status: TimestampStatus::Active,
            verification_result: None,
            created_at: now,
            updated_at: now,
        };

        let saved = self.db.timestamps.save(record).await?;
        info!(
            timestamp_id = saved.id,
            document_id = saved.document_id,
            authority = %saved.timestamp_authority,
            operation = operations::CREATE_TIMESTAMP,
            "Timestamp issued"
        );
        Ok(saved)
    }

    /// A timestamp verifies while it is ACTIVE
    pub async fn verify_timestamp(&self, timestamp_id: RecordId) -> ServiceResult<bool> {
        let valid = self
            .db
            .timestamps
            .find_by_id(timestamp_id)
            .await?
            .is_some_and(|t| t.status == TimestampStatus::Active);

        if !valid {
            warn!(timestamp_id, operation = operations::VERIFY_TIMESTAMP, "Timestamp not valid");
        }
        Ok(valid)
    }

    pub async fn get_timestamp(
        &self,
        timestamp_id: RecordId,
    ) -> ServiceResult<Option<TimestampRecord>> {
        Ok(self.db.timestamps.find_by_id(timestamp_id).await?)
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<TimestampRecord>> {
        Ok(self.db.timestamps.find_all().await?)
    }

    pub async fn list_by_document(&self, document_id: u64) -> ServiceResult<Vec<TimestampRecord>> {
        Ok(self
            .db
            .timestamps
            .find_where(&|t: &TimestampRecord| t.document_id == document_id)
            .await?)
    }

    pub async fn list_by_type(
        &self,
        document_type: TimestampedDocumentType,
    ) -> ServiceResult<Vec<TimestampRecord>> {
        Ok(self
            .db
            .timestamps
            .find_where(&|t: &TimestampRecord| t.document_type == document_type)
            .await?)
    }

    pub async fn list_by_authority(&self, authority: &str) -> ServiceResult<Vec<TimestampRecord>> {
        debug!(authority, "Listing timestamps by authority");
        Ok(self
            .db
            .timestamps
            .find_where(&|t: &TimestampRecord| t.timestamp_authority == authority)
            .await?)
    }

    /// Set a new status; `false` if the timestamp does not exist
    pub async fn update_status(
        &self,
        timestamp_id: RecordId,
        status: TimestampStatus,
    ) -> ServiceResult<bool> {
        let updated = self
            .db
            .timestamps
            .update(
                timestamp_id,
                Box::new(move |r: &mut TimestampRecord| r.status = status),
            )
            .await?;
        if updated.is_none() {
            return Ok(false);
        }

        info!(
            timestamp_id,
            status = status.as_str(),
            operation = operations::UPDATE_TIMESTAMP_STATUS,
            "Timestamp status updated"
        );
        Ok(true)
    }

    /// Remove a timestamp outright
    pub async fn delete(&self, timestamp_id: RecordId) -> ServiceResult<bool> {
        let deleted = self.db.timestamps.delete_by_id(timestamp_id).await?;
        if deleted {
            info!(timestamp_id, operation = operations::DELETE_TIMESTAMP, "Timestamp deleted");
        }
        Ok(deleted)
    }
}

//! Document Signature Service
//!
//! Signs document digests on behalf of a signer and tracks the resulting
//! records through SIGNED → VERIFIED, with REVOKED and EXPIRED as exits.

use chrono::Utc;
use estate_core::logging::operations;
use estate_core::{
    constants::{SIGNATURE_VALIDITY_YEARS, VERIFICATION_INVALID, VERIFICATION_VERIFIED},
    years_after, RecordId, ServiceError, ServiceResult, SignatureRecord, SignatureStatus,
    SignedDocumentType,
};
use estate_signer::{crypto, digest::hash_str};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::entities::keys;
use crate::repos::Database;
use crate::store::Store;

/// Document Signature Service
pub struct SignatureService {
    db: Arc<Database>,
}

impl SignatureService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Sign `document_content` with `private_key` and persist the record.
    pub async fn create_signature(
        &self,
        signer_id: u64,
        signer_name: &str,
        contract_id: u64,
        document_type: SignedDocumentType,
        document_content: &str,
        private_key: &str,
    ) -> ServiceResult<SignatureRecord> {
        if signer_name.trim().is_empty() {
            return Err(ServiceError::Validation("signer_name is required".to_string()));
        }

        let digest = hash_str(document_content);
        let signature_data = crypto::sign(&digest, private_key).map_err(|e| {
            warn!(
                signer_id,
                operation = operations::CREATE_SIGNATURE,
                error = %e,
                "Signing failed"
            );
            ServiceError::Signing(e.to_string())
        })?;
        let signature_hash = hash_str(&signature_data);

        if self
            .db
            .signatures
            .exists_by(keys::SIGNATURE_HASH, &signature_hash)
            .await?
        {
            return Err(ServiceError::Duplicate(
                "signature already recorded".to_string(),
            ));
        }

        let now = Utc::now();
        let record = SignatureRecord {
            id: 0,
            signer_id,
            signer_name: signer_name.to_string(),
            contract_id,
            document_type,
            signature_data,
            signature_hash,
            signed_at: now,
            expires_at: years_after(now, SIGNATURE_VALIDITY_YEARS),
            status: SignatureStatus::Signed,
            verification_result: None,
            created_at: now,
            updated_at: now,
        };

        let saved = self.db.signatures.save(record).await?;
        info!(
            signature_id = saved.id,
            signer_id,
            contract_id,
            operation = operations::CREATE_SIGNATURE,
            "Document signed"
        );
        Ok(saved)
    }

    /// Verify a stored signature against `document_content`.
    ///
    /// Fails closed: a missing, non-verifiable or expired record yields
    /// `false` without touching the crypto layer.
    pub async fn verify_signature(
        &self,
        signature_id: RecordId,
        document_content: &str,
        public_key: &str,
    ) -> ServiceResult<bool> {
        let Some(record) = self.db.signatures.find_by_id(signature_id).await? else {
            warn!(signature_id, operation = operations::VERIFY_SIGNATURE, "Signature not found");
            return Ok(false);
        };

        if !record.status.is_verifiable() {
            warn!(
                signature_id,
                status = record.status.as_str(),
                operation = operations::VERIFY_SIGNATURE,
                "Signature not in a verifiable state"
            );
            return Ok(false);
        }

        if record.is_expired(Utc::now()) {
            self.db
                .signatures
                .update(
                    signature_id,
                    Box::new(|r: &mut SignatureRecord| {
                        if r.status.is_verifiable() {
                            r.status = SignatureStatus::Expired;
                        }
                    }),
                )
                .await?;
            warn!(signature_id, operation = operations::VERIFY_SIGNATURE, "Signature expired");
            return Ok(false);
        }

        let digest = hash_str(document_content);
        let valid = match crypto::verify(&digest, &record.signature_data, public_key) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(
                    signature_id,
                    operation = operations::VERIFY_SIGNATURE,
                    error = %e,
                    "Malformed verification input"
                );
                return Ok(false);
            }
        };

        // the crypto check ran outside the lock; re-check status on write
        let stored = self
            .db
            .signatures
            .update(
                signature_id,
                Box::new(move |r: &mut SignatureRecord| record_outcome(r, valid)),
            )
            .await?;

        match stored {
            Some(r) if valid && r.status == SignatureStatus::Verified => {
                info!(signature_id, operation = operations::VERIFY_SIGNATURE, "Signature verified");
                Ok(true)
            }
            Some(r) if valid => {
                warn!(
                    signature_id,
                    status = r.status.as_str(),
                    operation = operations::VERIFY_SIGNATURE,
                    "Signature changed state during verification"
                );
                Ok(false)
            }
            _ => {
                warn!(signature_id, operation = operations::VERIFY_SIGNATURE, "Signature invalid");
                Ok(false)
            }
        }
    }

    /// Mark a signature REVOKED; `false` if it does not exist
    pub async fn revoke(&self, signature_id: RecordId) -> ServiceResult<bool> {
        let revoked = self
            .db
            .signatures
            .update(
                signature_id,
                Box::new(|r: &mut SignatureRecord| r.status = SignatureStatus::Revoked),
            )
            .await?
            .is_some();

        if revoked {
            info!(signature_id, operation = operations::REVOKE_SIGNATURE, "Signature revoked");
        }
        Ok(revoked)
    }

    pub async fn get_signature(
        &self,
        signature_id: RecordId,
    ) -> ServiceResult<Option<SignatureRecord>> {
        Ok(self.db.signatures.find_by_id(signature_id).await?)
    }

    pub async fn list_by_signer(&self, signer_id: u64) -> ServiceResult<Vec<SignatureRecord>> {
        debug!(signer_id, "Listing signatures by signer");
        Ok(self
            .db
            .signatures
            .find_where(&|s: &SignatureRecord| s.signer_id == signer_id)
            .await?)
    }

    pub async fn list_by_contract(&self, contract_id: u64) -> ServiceResult<Vec<SignatureRecord>> {
        debug!(contract_id, "Listing signatures by contract");
        Ok(self
            .db
            .signatures
            .find_where(&|s: &SignatureRecord| s.contract_id == contract_id)
            .await?)
    }
}

/// Record a crypto outcome; only a still-verifiable record moves to VERIFIED
fn record_outcome(record: &mut SignatureRecord, valid: bool) {
    if !record.status.is_verifiable() {
        return;
    }
    if valid {
        record.status = SignatureStatus::Verified;
        record.verification_result = Some(VERIFICATION_VERIFIED.to_string());
    } else {
        record.verification_result = Some(VERIFICATION_INVALID.to_string());
    }
}

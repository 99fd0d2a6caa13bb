//! Document signature endpoints

use axum::extract::State;
use estate_core::{RecordId, SignatureRecord};

use crate::dto::{
    CreateSignatureRequest, SuccessResponse, VerificationResponse, VerifySignatureRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::extract::{Json, Path};
use crate::state::AppState;

/// Sign a document
pub async fn create_signature(
    State(state): State<AppState>,
    Json(req): Json<CreateSignatureRequest>,
) -> ApiResult<Json<SignatureRecord>> {
    let record = state
        .signatures
        .create_signature(
            req.signer_id,
            &req.signer_name,
            req.contract_id,
            req.document_type,
            &req.document_content,
            &req.private_key,
        )
        .await?;

    Ok(Json(record))
}

/// Get signature by ID
pub async fn get_signature(
    State(state): State<AppState>,
    Path(signature_id): Path<RecordId>,
) -> ApiResult<Json<SignatureRecord>> {
    state
        .signatures
        .get_signature(signature_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("signature {signature_id}")))
}

/// Verify a stored signature against document content
pub async fn verify_signature(
    State(state): State<AppState>,
    Path(signature_id): Path<RecordId>,
    Json(req): Json<VerifySignatureRequest>,
) -> ApiResult<Json<VerificationResponse>> {
    let valid = state
        .signatures
        .verify_signature(signature_id, &req.document_content, &req.public_key)
        .await?;

    let message = if valid {
        "Signature is valid"
    } else {
        "Signature is invalid"
    };
    Ok(Json(VerificationResponse {
        id: signature_id,
        valid,
        message: message.to_string(),
    }))
}

/// Revoke a signature
pub async fn revoke_signature(
    State(state): State<AppState>,
    Path(signature_id): Path<RecordId>,
) -> ApiResult<Json<SuccessResponse>> {
    let revoked = state.signatures.revoke(signature_id).await?;
    Ok(Json(SuccessResponse::new(
        revoked,
        "Signature revoked",
        "Signature not found",
    )))
}

/// Signatures by signer
pub async fn list_by_signer(
    State(state): State<AppState>,
    Path(signer_id): Path<u64>,
) -> ApiResult<Json<Vec<SignatureRecord>>> {
    Ok(Json(state.signatures.list_by_signer(signer_id).await?))
}

/// Signatures on a contract
pub async fn list_by_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<u64>,
) -> ApiResult<Json<Vec<SignatureRecord>>> {
    Ok(Json(state.signatures.list_by_contract(contract_id).await?))
}

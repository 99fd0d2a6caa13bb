//! Biometric enrollment endpoints

use axum::extract::State;
use estate_core::{BiometricRecord, RecordId};
use estate_db::services::quality_level;

use crate::dto::{
    AuthenticateBiometricRequest, AuthenticationResponse, EvaluateQualityRequest,
    QualityResponse, RegisterBiometricRequest, SuccessResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::extract::{Json, Path};
use crate::state::AppState;

/// Enroll a payload; quality is scored here, never taken from the caller
pub async fn register_biometric(
    State(state): State<AppState>,
    Json(req): Json<RegisterBiometricRequest>,
) -> ApiResult<Json<BiometricRecord>> {
    let quality_score = state.biometrics.evaluate_quality(&req.biometric_data);

    let record = state
        .biometrics
        .register(
            req.user_id,
            &req.user_name,
            req.biometric_type,
            &req.biometric_data,
            quality_score,
        )
        .await?;

    Ok(Json(record))
}

pub async fn authenticate_biometric(
    State(state): State<AppState>,
    Json(req): Json<AuthenticateBiometricRequest>,
) -> ApiResult<Json<AuthenticationResponse>> {
    let authenticated = state
        .biometrics
        .authenticate(req.user_id, req.biometric_type, &req.biometric_data)
        .await?;

    let message = if authenticated {
        "Authentication succeeded"
    } else {
        "Authentication failed"
    };
    Ok(Json(AuthenticationResponse {
        authenticated,
        message: message.to_string(),
    }))
}

pub async fn evaluate_quality(
    State(state): State<AppState>,
    Json(req): Json<EvaluateQualityRequest>,
) -> ApiResult<Json<QualityResponse>> {
    let quality_score = state.biometrics.evaluate_quality(&req.biometric_data);
    Ok(Json(QualityResponse {
        quality_score,
        quality_level: quality_level(quality_score),
        message: format!("Quality score: {quality_score}"),
    }))
}

pub async fn get_biometric(
    State(state): State<AppState>,
    Path(biometric_id): Path<RecordId>,
) -> ApiResult<Json<BiometricRecord>> {
    state
        .biometrics
        .get_biometric(biometric_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("biometric {biometric_id}")))
}

pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> ApiResult<Json<Vec<BiometricRecord>>> {
    Ok(Json(state.biometrics.list_by_user(user_id).await?))
}

/// Flip an enrollment to INACTIVE
pub async fn deactivate_biometric(
    State(state): State<AppState>,
    Path(biometric_id): Path<RecordId>,
) -> ApiResult<Json<SuccessResponse>> {
    let done = state.biometrics.deactivate(biometric_id).await?;
    Ok(Json(SuccessResponse::new(
        done,
        "Biometric deactivated",
        "Biometric not found",
    )))
}

/// Soft delete: the row stays, status becomes DELETED
pub async fn delete_biometric(
    State(state): State<AppState>,
    Path(biometric_id): Path<RecordId>,
) -> ApiResult<Json<SuccessResponse>> {
    let done = state.biometrics.delete(biometric_id).await?;
    Ok(Json(SuccessResponse::new(
        done,
        "Biometric deleted",
        "Biometric not found",
    )))
}

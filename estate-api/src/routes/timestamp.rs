//! Digital timestamp endpoints

use axum::{extract::State, http::StatusCode};
use estate_core::{NewTimestamp, RecordId, TimestampRecord, TimestampedDocumentType};

use crate::dto::VerificationResponse;
use crate::error::{ApiError, ApiResult};
use crate::extract::{Json, Path};
use crate::state::AppState;

/// Issue a timestamp
pub async fn create_timestamp(
    State(state): State<AppState>,
    Json(req): Json<NewTimestamp>,
) -> ApiResult<Json<TimestampRecord>> {
    Ok(Json(state.timestamps.create_timestamp(req).await?))
}

pub async fn list_timestamps(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TimestampRecord>>> {
    Ok(Json(state.timestamps.list_all().await?))
}

/// Get timestamp by ID
pub async fn get_timestamp(
    State(state): State<AppState>,
    Path(timestamp_id): Path<RecordId>,
) -> ApiResult<Json<TimestampRecord>> {
    state
        .timestamps
        .get_timestamp(timestamp_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("timestamp {timestamp_id}")))
}

/// A timestamp verifies while it is ACTIVE
pub async fn verify_timestamp(
    State(state): State<AppState>,
    Path(timestamp_id): Path<RecordId>,
) -> ApiResult<Json<VerificationResponse>> {
    let valid = state.timestamps.verify_timestamp(timestamp_id).await?;
    let message = if valid {
        "Timestamp is active"
    } else {
        "Timestamp is not active"
    };
    Ok(Json(VerificationResponse {
        id: timestamp_id,
        valid,
        message: message.to_string(),
    }))
}

pub async fn delete_timestamp(
    State(state): State<AppState>,
    Path(timestamp_id): Path<RecordId>,
) -> ApiResult<StatusCode> {
    if !state.timestamps.delete(timestamp_id).await? {
        return Err(ApiError::not_found(format!("timestamp {timestamp_id}")));
    }
    Ok(StatusCode::OK)
}

pub async fn list_by_document(
    State(state): State<AppState>,
    Path(document_id): Path<u64>,
) -> ApiResult<Json<Vec<TimestampRecord>>> {
    Ok(Json(state.timestamps.list_by_document(document_id).await?))
}

pub async fn list_by_type(
    State(state): State<AppState>,
    Path(document_type): Path<TimestampedDocumentType>,
) -> ApiResult<Json<Vec<TimestampRecord>>> {
    Ok(Json(state.timestamps.list_by_type(document_type).await?))
}

pub async fn list_by_authority(
    State(state): State<AppState>,
    Path(authority): Path<String>,
) -> ApiResult<Json<Vec<TimestampRecord>>> {
    Ok(Json(state.timestamps.list_by_authority(&authority).await?))
}

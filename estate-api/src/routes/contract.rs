//! Contract endpoints

use axum::{extract::State, http::StatusCode};
use chrono::{Duration, Utc};
use estate_core::{ContractInput, ContractStatus, ContractType, ContractView, RecordId};

use crate::dto::ExpiringQuery;
use crate::error::{ApiError, ApiResult};
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

/// Horizon for `/contracts/expiring` when no `before` is given
const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

pub async fn list_contracts(State(state): State<AppState>) -> ApiResult<Json<Vec<ContractView>>> {
    Ok(Json(state.contracts.list_all().await?))
}

pub async fn get_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<RecordId>,
) -> ApiResult<Json<ContractView>> {
    state
        .contracts
        .get(contract_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("contract {contract_id}")))
}

pub async fn create_contract(
    State(state): State<AppState>,
    Json(req): Json<ContractInput>,
) -> ApiResult<Json<ContractView>> {
    Ok(Json(state.contracts.create(req).await?))
}

pub async fn update_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<RecordId>,
    Json(req): Json<ContractInput>,
) -> ApiResult<Json<ContractView>> {
    state
        .contracts
        .update(contract_id, req)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("contract {contract_id}")))
}

pub async fn delete_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<RecordId>,
) -> ApiResult<StatusCode> {
    if !state.contracts.delete(contract_id).await? {
        return Err(ApiError::not_found(format!("contract {contract_id}")));
    }
    Ok(StatusCode::OK)
}

pub async fn list_by_type(
    State(state): State<AppState>,
    Path(contract_type): Path<ContractType>,
) -> ApiResult<Json<Vec<ContractView>>> {
    Ok(Json(state.contracts.list_by_type(contract_type).await?))
}

pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<ContractStatus>,
) -> ApiResult<Json<Vec<ContractView>>> {
    Ok(Json(state.contracts.list_by_status(status).await?))
}

pub async fn list_by_property(
    State(state): State<AppState>,
    Path(property_id): Path<RecordId>,
) -> ApiResult<Json<Vec<ContractView>>> {
    Ok(Json(state.contracts.list_by_property(property_id).await?))
}

pub async fn list_by_client(
    State(state): State<AppState>,
    Path(client_id): Path<RecordId>,
) -> ApiResult<Json<Vec<ContractView>>> {
    Ok(Json(state.contracts.list_by_client(client_id).await?))
}

/// Active contracts ending on or before `?before=` (RFC 3339)
pub async fn list_expiring(
    State(state): State<AppState>,
    Query(params): Query<ExpiringQuery>,
) -> ApiResult<Json<Vec<ContractView>>> {
    let before = params
        .before
        .unwrap_or_else(|| Utc::now() + Duration::days(DEFAULT_EXPIRY_WINDOW_DAYS));
    Ok(Json(state.contracts.list_expiring(before).await?))
}

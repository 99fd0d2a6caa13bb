//! Transaction endpoints

use axum::{extract::State, http::StatusCode};
use estate_core::{RecordId, Transaction, TransactionInput, TransactionStatus, TransactionType};

use crate::error::{ApiError, ApiResult};
use crate::extract::{Json, Path};
use crate::state::AppState;

pub async fn list_transactions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Transaction>>> {
    Ok(Json(state.transactions.list_all().await?))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<RecordId>,
) -> ApiResult<Json<Transaction>> {
    state
        .transactions
        .get(transaction_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("transaction {transaction_id}")))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(req): Json<TransactionInput>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(state.transactions.create(req).await?))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<RecordId>,
    Json(req): Json<TransactionInput>,
) -> ApiResult<Json<Transaction>> {
    state
        .transactions
        .update(transaction_id, req)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("transaction {transaction_id}")))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<RecordId>,
) -> ApiResult<StatusCode> {
    if !state.transactions.delete(transaction_id).await? {
        return Err(ApiError::not_found(format!("transaction {transaction_id}")));
    }
    Ok(StatusCode::OK)
}

pub async fn list_by_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<RecordId>,
) -> ApiResult<Json<Vec<Transaction>>> {
    Ok(Json(state.transactions.list_by_contract(contract_id).await?))
}

pub async fn list_by_type(
    State(state): State<AppState>,
    Path(transaction_type): Path<TransactionType>,
) -> ApiResult<Json<Vec<Transaction>>> {
    Ok(Json(state.transactions.list_by_type(transaction_type).await?))
}

pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<TransactionStatus>,
) -> ApiResult<Json<Vec<Transaction>>> {
    Ok(Json(state.transactions.list_by_status(status).await?))
}

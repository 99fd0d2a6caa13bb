//! Client endpoints

use axum::{extract::State, http::StatusCode};
use estate_core::{Client, ClientFilter, ClientInput, ClientType, RecordId};

use crate::dto::SearchQuery;
use crate::error::{ApiError, ApiResult};
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(state.clients.list_all().await?))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<RecordId>,
) -> ApiResult<Json<Client>> {
    state
        .clients
        .get(client_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("client {client_id}")))
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(req): Json<ClientInput>,
) -> ApiResult<Json<Client>> {
    Ok(Json(state.clients.create(req).await?))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<RecordId>,
    Json(req): Json<ClientInput>,
) -> ApiResult<Json<Client>> {
    state
        .clients
        .update(client_id, req)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("client {client_id}")))
}

pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<RecordId>,
) -> ApiResult<StatusCode> {
    if !state.clients.delete(client_id).await? {
        return Err(ApiError::not_found(format!("client {client_id}")));
    }
    Ok(StatusCode::OK)
}

pub async fn list_by_type(
    State(state): State<AppState>,
    Path(client_type): Path<ClientType>,
) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(state.clients.list_by_type(client_type).await?))
}

pub async fn search_clients(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(state.clients.search(&params.query).await?))
}

/// `?name=&email=&client_type=&status=`
pub async fn advanced_search(
    State(state): State<AppState>,
    Query(filter): Query<ClientFilter>,
) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(state.clients.advanced_search(&filter).await?))
}

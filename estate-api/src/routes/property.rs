//! Property endpoints

use axum::{extract::State, http::StatusCode};
use estate_core::{
    NewProperty, Property, PropertyCriteria, PropertyPatch, PropertyStatus, PropertyType, RecordId,
};

use crate::dto::SearchQuery;
use crate::error::{ApiError, ApiResult};
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

pub async fn list_properties(State(state): State<AppState>) -> ApiResult<Json<Vec<Property>>> {
    Ok(Json(state.properties.list_all().await?))
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(property_id): Path<RecordId>,
) -> ApiResult<Json<Property>> {
    state
        .properties
        .get(property_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("property {property_id}")))
}

pub async fn create_property(
    State(state): State<AppState>,
    Json(req): Json<NewProperty>,
) -> ApiResult<Json<Property>> {
    Ok(Json(state.properties.create(req).await?))
}

/// Partial update: absent fields keep their value
pub async fn update_property(
    State(state): State<AppState>,
    Path(property_id): Path<RecordId>,
    Json(patch): Json<PropertyPatch>,
) -> ApiResult<Json<Property>> {
    state
        .properties
        .update(property_id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("property {property_id}")))
}

pub async fn delete_property(
    State(state): State<AppState>,
    Path(property_id): Path<RecordId>,
) -> ApiResult<StatusCode> {
    if !state.properties.delete(property_id).await? {
        return Err(ApiError::not_found(format!("property {property_id}")));
    }
    Ok(StatusCode::OK)
}

pub async fn list_by_type(
    State(state): State<AppState>,
    Path(property_type): Path<PropertyType>,
) -> ApiResult<Json<Vec<Property>>> {
    Ok(Json(state.properties.list_by_type(property_type).await?))
}

pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<PropertyStatus>,
) -> ApiResult<Json<Vec<Property>>> {
    Ok(Json(state.properties.list_by_status(status).await?))
}

/// `?query=` over name and address
pub async fn search_properties(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Property>>> {
    Ok(Json(state.properties.search(&params.query).await?))
}

/// `?property_type=&status=&min_price=&max_price=&min_area=&max_area=`
pub async fn search_by_criteria(
    State(state): State<AppState>,
    Query(criteria): Query<PropertyCriteria>,
) -> ApiResult<Json<Vec<Property>>> {
    Ok(Json(state.properties.search_by_criteria(&criteria).await?))
}

//! HTTP handlers for the registry API

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::types::*;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use stringvault_core::RawFilterParams;

/// POST /strings - Analyze and store a string
///
/// The body is inspected by hand so a missing or non-string "value"
/// reports the shape problem instead of a generic decode failure.
pub async fn create_string(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<(StatusCode, Json<StringRecordResponse>)> {
    let value = body
        .get("value")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ApiError::invalid_input("Body must include a string field \"value\""))?;

    let mut registry = state.registry.write().await;
    let record = registry.create(value)?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// GET /strings/:target - Fetch a record by raw string or id
pub async fn get_string(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> ApiResult<Json<StringRecordResponse>> {
    let registry = state.registry.read().await;
    let record = registry.lookup(&target)?;
    Ok(Json(record.clone().into()))
}

/// GET /strings - List records, optionally narrowed by typed filters
pub async fn list_strings(
    State(state): State<AppState>,
    Query(params): Query<RawFilterParams>,
) -> ApiResult<Json<ListStringsResponse>> {
    // Parameters are validated before any record is scanned
    let filters = params.validate()?;

    let registry = state.registry.read().await;
    let data = registry.list(&filters);
    let count = data.len();

    Ok(Json(ListStringsResponse {
        data: data.into_iter().map(Into::into).collect(),
        count,
        filters_applied: filters,
    }))
}

/// GET /strings/filter-by-natural-language - Filter via a fixed phrase grammar
pub async fn query_strings(
    State(state): State<AppState>,
    Query(params): Query<NlQueryParams>,
) -> ApiResult<Json<NlQueryResponse>> {
    let query = params
        .query
        .ok_or_else(|| ApiError::invalid_input("Query parameter \"query\" is required"))?;

    let registry = state.registry.read().await;
    let outcome = registry.nl_query(&query)?;
    let count = outcome.matches.len();

    Ok(Json(NlQueryResponse {
        data: outcome.matches.into_iter().map(Into::into).collect(),
        count,
        interpreted_query: InterpretedQuery {
            original: query,
            parsed_filters: outcome.filters,
        },
    }))
}

/// DELETE /strings/:target - Remove a record by raw string or id
pub async fn delete_string(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> ApiResult<StatusCode> {
    let mut registry = state.registry.write().await;
    registry.delete(&target)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health - Service liveness and a few cheap stats
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.registry.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        stored_strings: registry.len(),
    })
}

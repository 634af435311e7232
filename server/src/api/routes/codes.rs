//! Incident code lookup

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::types::ApiError;
use crate::data::filters::CodeFilterParams;
use crate::data::{JsonRow, QueryExecutor};
use crate::domain::list_codes;

/// Shared state for the codes endpoint
#[derive(Clone)]
pub struct CodesApiState {
    pub executor: Arc<dyn QueryExecutor>,
}

/// Build codes routes
pub fn routes(executor: Arc<dyn QueryExecutor>) -> Router<()> {
    Router::new()
        .route("/codes", get(get_codes))
        .with_state(CodesApiState { executor })
}

/// One row of `GET /codes`
///
/// Schema only; the handler returns the row as read from storage.
#[derive(Serialize, ToSchema)]
pub struct CodeDto {
    #[schema(example = 600)]
    pub code: i64,
    #[serde(rename = "type")]
    #[schema(example = "Theft")]
    pub incident_type: String,
}

/// List incident codes
#[utoipa::path(
    get,
    path = "/codes",
    tag = "lookups",
    params(CodeFilterParams),
    responses(
        (status = 200, description = "Codes ordered by code", body = [CodeDto]),
        (status = 400, description = "Malformed code or code_range")
    )
)]
pub async fn get_codes(
    State(state): State<CodesApiState>,
    params: Result<Query<CodeFilterParams>, QueryRejection>,
) -> Result<Json<Vec<JsonRow>>, ApiError> {
    let Query(params) = params.map_err(ApiError::from_query_rejection)?;
    let rows = list_codes(state.executor.as_ref(), &params)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(rows))
}

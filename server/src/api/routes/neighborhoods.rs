//! Neighborhood lookup

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::types::ApiError;
use crate::data::filters::NeighborhoodFilterParams;
use crate::data::{JsonRow, QueryExecutor};
use crate::domain::list_neighborhoods;

#[derive(Clone)]
pub struct NeighborhoodsApiState {
    pub executor: Arc<dyn QueryExecutor>,
}

/// Build neighborhoods routes
pub fn routes(executor: Arc<dyn QueryExecutor>) -> Router<()> {
    Router::new()
        .route("/neighborhoods", get(get_neighborhoods))
        .with_state(NeighborhoodsApiState { executor })
}

/// One row of `GET /neighborhoods`
///
/// Schema only; the handler returns the row as read from storage.
#[derive(Serialize, ToSchema)]
pub struct NeighborhoodDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Conway/Battlecreek/Highwood")]
    pub name: String,
}

/// List neighborhoods
#[utoipa::path(
    get,
    path = "/neighborhoods",
    tag = "lookups",
    params(NeighborhoodFilterParams),
    responses(
        (status = 200, description = "Neighborhoods ordered by id", body = [NeighborhoodDto]),
        (status = 400, description = "Malformed id list")
    )
)]
pub async fn get_neighborhoods(
    State(state): State<NeighborhoodsApiState>,
    params: Result<Query<NeighborhoodFilterParams>, QueryRejection>,
) -> Result<Json<Vec<JsonRow>>, ApiError> {
    let Query(params) = params.map_err(ApiError::from_query_rejection)?;
    let rows = list_neighborhoods(state.executor.as_ref(), &params)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(rows))
}

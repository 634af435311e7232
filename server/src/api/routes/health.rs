//! Health check endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::{QueryExecutor, SqlQuery};

#[derive(Clone)]
pub struct HealthApiState {
    pub executor: Arc<dyn QueryExecutor>,
}

/// Build health routes
pub fn routes(executor: Arc<dyn QueryExecutor>) -> Router<()> {
    Router::new()
        .route("/api/v1/health", get(health))
        .with_state(HealthApiState { executor })
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// `ok` when the database answers a trivial query
    pub database: &'static str,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<HealthApiState>) -> impl IntoResponse {
    let probe = SqlQuery::new("SELECT 1 AS ok", Vec::new());
    let (status, label, database) = match state.executor.select(&probe).await {
        Ok(_) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check database probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: label,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

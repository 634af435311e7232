//! Incident endpoints
//!
//! Filtered listing plus the guarded insert and delete.

pub mod types;

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, put};
use axum::{Json, Router};

use types::{CreateIncidentResponse, IncidentDto, RemoveIncidentResponse};

use crate::api::types::ApiError;
use crate::data::filters::IncidentFilterParams;
use crate::data::{JsonRow, QueryExecutor};
use crate::domain::{IncidentGuard, NewIncidentRequest, RemoveIncidentRequest, list_incidents};

/// Shared state for incident endpoints
#[derive(Clone)]
pub struct IncidentsApiState {
    pub executor: Arc<dyn QueryExecutor>,
    pub guard: IncidentGuard,
}

/// Build incident routes
pub fn routes(executor: Arc<dyn QueryExecutor>) -> Router<()> {
    let state = IncidentsApiState {
        guard: IncidentGuard::new(executor.clone()),
        executor,
    };

    Router::new()
        .route("/incidents", get(get_incidents))
        .route("/new-incident", put(create_incident))
        .route("/remove-incident", delete(remove_incident))
        .with_state(state)
}

/// List incidents, newest first
#[utoipa::path(
    get,
    path = "/incidents",
    tag = "incidents",
    params(IncidentFilterParams),
    responses(
        (status = 200, description = "Incidents ordered by date_time descending", body = [IncidentDto]),
        (status = 400, description = "Malformed filter or limit")
    )
)]
pub async fn get_incidents(
    State(state): State<IncidentsApiState>,
    params: Result<Query<IncidentFilterParams>, QueryRejection>,
) -> Result<Json<Vec<JsonRow>>, ApiError> {
    let Query(params) = params.map_err(ApiError::from_query_rejection)?;
    let rows = list_incidents(state.executor.as_ref(), &params)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(rows))
}

/// Insert a new incident
#[utoipa::path(
    put,
    path = "/new-incident",
    tag = "incidents",
    request_body = NewIncidentRequest,
    responses(
        (status = 201, description = "Incident created", body = CreateIncidentResponse),
        (status = 400, description = "Missing field or malformed body"),
        (status = 409, description = "Case number already exists")
    )
)]
pub async fn create_incident(
    State(state): State<IncidentsApiState>,
    body: Result<Json<NewIncidentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateIncidentResponse>), ApiError> {
    let Json(request) = body.map_err(ApiError::from_json_rejection)?;
    let case_number = state
        .guard
        .create(request)
        .await
        .map_err(ApiError::from_domain)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateIncidentResponse {
            case_number,
            created: true,
        }),
    ))
}

/// Delete an incident by case number
#[utoipa::path(
    delete,
    path = "/remove-incident",
    tag = "incidents",
    request_body = RemoveIncidentRequest,
    responses(
        (status = 200, description = "Incident removed", body = RemoveIncidentResponse),
        (status = 400, description = "Missing case_number or malformed body"),
        (status = 404, description = "No incident with this case number")
    )
)]
pub async fn remove_incident(
    State(state): State<IncidentsApiState>,
    body: Result<Json<RemoveIncidentRequest>, JsonRejection>,
) -> Result<Json<RemoveIncidentResponse>, ApiError> {
    let Json(request) = body.map_err(ApiError::from_json_rejection)?;
    let case_number = state
        .guard
        .remove(request)
        .await
        .map_err(ApiError::from_domain)?;

    Ok(Json(RemoveIncidentResponse {
        case_number,
        removed: true,
    }))
}

//! Incident endpoint DTOs

use serde::Serialize;
use utoipa::ToSchema;

/// One row of `GET /incidents`
///
/// Schema only; the handler returns the row as read from storage.
#[derive(Serialize, ToSchema)]
pub struct IncidentDto {
    #[schema(example = 14172166)]
    pub case_number: i64,
    #[schema(example = "2014-08-14")]
    pub date: String,
    #[schema(example = "00:34:00")]
    pub time: String,
    #[schema(example = 600)]
    pub code: i64,
    #[schema(example = "Theft")]
    pub incident: String,
    #[schema(example = 119)]
    pub police_grid: i64,
    #[schema(example = 1)]
    pub neighborhood_number: i64,
    #[schema(example = "4XX LUELLA ST")]
    pub block: String,
}

/// Response to a successful insert
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateIncidentResponse {
    pub case_number: i64,
    pub created: bool,
}

/// Response to a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct RemoveIncidentResponse {
    pub case_number: i64,
    pub removed: bool,
}

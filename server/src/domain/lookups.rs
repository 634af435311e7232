//! Filtered reads
//!
//! Each lookup compiles its parameters before touching storage, so a bad
//! parameter never reaches the executor.

use crate::data::filters::{
    CodeFilterParams, IncidentFilterParams, NeighborhoodFilterParams, compile_code_query,
    compile_incident_query, compile_neighborhood_query,
};
use crate::data::traits::QueryExecutor;
use crate::data::types::{JsonRow, SqlQuery};
use crate::domain::error::DomainError;

async fn run(
    executor: &dyn QueryExecutor,
    lookup: &'static str,
    query: SqlQuery,
) -> Result<Vec<JsonRow>, DomainError> {
    tracing::debug!(lookup, sql = %query.sql, params = ?query.params, "Running lookup");
    let rows = executor.select(&query).await?;
    tracing::debug!(lookup, rows = rows.len(), "Lookup complete");
    Ok(rows)
}

/// Incident codes, ordered by code
pub async fn list_codes(
    executor: &dyn QueryExecutor,
    params: &CodeFilterParams,
) -> Result<Vec<JsonRow>, DomainError> {
    run(executor, "codes", compile_code_query(params)?).await
}

/// Neighborhoods, ordered by id
pub async fn list_neighborhoods(
    executor: &dyn QueryExecutor,
    params: &NeighborhoodFilterParams,
) -> Result<Vec<JsonRow>, DomainError> {
    run(executor, "neighborhoods", compile_neighborhood_query(params)?).await
}

/// Incidents, newest first, capped by `limit`
pub async fn list_incidents(
    executor: &dyn QueryExecutor,
    params: &IncidentFilterParams,
) -> Result<Vec<JsonRow>, DomainError> {
    run(executor, "incidents", compile_incident_query(params)?).await
}

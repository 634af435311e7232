//! Incident mutations
//!
//! Insert and delete both run an existence check on `case_number` before
//! writing. The check and the write are separate statements, so two callers
//! racing on the same case number can both pass the check. The UNIQUE
//! constraint on `Incidents.case_number` catches the insert side of that race
//! and is reported as a duplicate.

mod types;

pub use types::{NewIncident, NewIncidentRequest, RemoveIncidentRequest};

use std::sync::Arc;

use crate::data::traits::QueryExecutor;
use crate::data::types::{SqlQuery, SqlValue};
use crate::domain::error::DomainError;

const SELECT_CASE: &str = "SELECT case_number FROM Incidents WHERE case_number = ?";

const INSERT_INCIDENT: &str = "INSERT INTO Incidents \
     (case_number, date_time, code, incident, police_grid, neighborhood_number, block) \
     VALUES (?, ?, ?, ?, ?, ?, ?)";

const DELETE_CASE: &str = "DELETE FROM Incidents WHERE case_number = ?";

/// Existence-gated writer for the `Incidents` table
#[derive(Clone)]
pub struct IncidentGuard {
    executor: Arc<dyn QueryExecutor>,
}

impl IncidentGuard {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    /// Insert a new incident, returning its case number
    pub async fn create(&self, request: NewIncidentRequest) -> Result<i64, DomainError> {
        let incident = NewIncident::try_from(request)?;
        let case_number = incident.case_number;

        if self.exists(case_number).await? {
            tracing::debug!(case_number, "Insert rejected, case already exists");
            return Err(DomainError::DuplicateCase { case_number });
        }

        let insert = SqlQuery::new(INSERT_INCIDENT, incident.into_params());
        match self.executor.execute(&insert).await {
            Ok(_) => {
                tracing::info!(case_number, "Incident created");
                Ok(case_number)
            }
            Err(e) if e.is_unique_violation() => {
                tracing::warn!(case_number, "Insert lost race on case number");
                Err(DomainError::DuplicateCase { case_number })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete an incident, returning its case number
    pub async fn remove(&self, request: RemoveIncidentRequest) -> Result<i64, DomainError> {
        let case_number = request
            .case_number
            .ok_or(DomainError::missing("case_number"))?;

        if !self.exists(case_number).await? {
            tracing::debug!(case_number, "Delete rejected, case not found");
            return Err(DomainError::NotFound { case_number });
        }

        let delete = SqlQuery::new(DELETE_CASE, vec![SqlValue::Integer(case_number)]);
        let affected = self.executor.execute(&delete).await?;
        if affected == 0 {
            // Removed by another caller between the check and the delete
            return Err(DomainError::NotFound { case_number });
        }

        tracing::info!(case_number, "Incident removed");
        Ok(case_number)
    }

    async fn exists(&self, case_number: i64) -> Result<bool, DomainError> {
        let check = SqlQuery::new(SELECT_CASE, vec![SqlValue::Integer(case_number)]);
        let rows = self.executor.select(&check).await?;
        Ok(!rows.is_empty())
    }
}

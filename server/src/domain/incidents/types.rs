//! Incident mutation payloads

use serde::Deserialize;
use utoipa::ToSchema;

use crate::data::types::SqlValue;
use crate::domain::error::DomainError;

/// Payload for `PUT /new-incident`
///
/// Every field is optional at the wire level so an absent one surfaces as a
/// `MissingField` error naming it, rather than a generic decode failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewIncidentRequest {
    #[schema(example = 14172166)]
    pub case_number: Option<i64>,
    /// Calendar date, `YYYY-MM-DD`
    #[schema(example = "2014-08-14")]
    pub date: Option<String>,
    /// Time of day, `HH:MM:SS`
    #[schema(example = "00:34:00")]
    pub time: Option<String>,
    #[schema(example = 600)]
    pub code: Option<i64>,
    #[schema(example = "Theft")]
    pub incident: Option<String>,
    #[schema(example = 119)]
    pub police_grid: Option<i64>,
    #[schema(example = 1)]
    pub neighborhood_number: Option<i64>,
    #[schema(example = "4XX LUELLA ST")]
    pub block: Option<String>,
}

/// Payload for `DELETE /remove-incident`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RemoveIncidentRequest {
    #[schema(example = 14172166)]
    pub case_number: Option<i64>,
}

/// A new incident with every field present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
    pub case_number: i64,
    /// `{date}T{time}`, stored as given
    pub date_time: String,
    pub code: i64,
    pub incident: String,
    pub police_grid: i64,
    pub neighborhood_number: i64,
    pub block: String,
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, DomainError> {
    value.ok_or(DomainError::MissingField { field })
}

impl TryFrom<NewIncidentRequest> for NewIncident {
    type Error = DomainError;

    fn try_from(req: NewIncidentRequest) -> Result<Self, Self::Error> {
        let case_number = require(req.case_number, "case_number")?;
        let date = require(req.date, "date")?;
        let time = require(req.time, "time")?;
        let code = require(req.code, "code")?;
        let incident = require(req.incident, "incident")?;
        let police_grid = require(req.police_grid, "police_grid")?;
        let neighborhood_number = require(req.neighborhood_number, "neighborhood_number")?;
        let block = require(req.block, "block")?;

        Ok(Self {
            case_number,
            date_time: format!("{}T{}", date, time),
            code,
            incident,
            police_grid,
            neighborhood_number,
            block,
        })
    }
}

impl NewIncident {
    /// Values in `Incidents` insert column order
    pub fn into_params(self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.case_number),
            SqlValue::Text(self.date_time),
            SqlValue::Integer(self.code),
            SqlValue::Text(self.incident),
            SqlValue::Integer(self.police_grid),
            SqlValue::Integer(self.neighborhood_number),
            SqlValue::Text(self.block),
        ]
    }
}

#[cfg(test)]
pub(crate) fn complete_request() -> NewIncidentRequest {
    NewIncidentRequest {
        case_number: Some(14172166),
        date: Some("2014-08-14".into()),
        time: Some("00:34:00".into()),
        code: Some(600),
        incident: Some("Theft".into()),
        police_grid: Some(119),
        neighborhood_number: Some(1),
        block: Some("4XX LUELLA ST".into()),
    }
}

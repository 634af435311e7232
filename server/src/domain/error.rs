//! Domain error type
//!
//! Every failure a lookup or mutation can report. Caller mistakes are kept
//! apart from storage failures so the API layer can answer precisely.

use thiserror::Error;

use crate::data::DataError;
use crate::data::filters::InputError;

#[derive(Error, Debug)]
pub enum DomainError {
    /// A query parameter failed to parse
    #[error(transparent)]
    Input(#[from] InputError),

    /// A required payload field was absent
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    /// An incident with this case number already exists
    #[error("Incident {case_number} already exists")]
    DuplicateCase { case_number: i64 },

    /// No incident with this case number exists
    #[error("Incident {case_number} not found")]
    NotFound { case_number: i64 },

    /// The store failed independently of the input
    #[error("Storage error: {0}")]
    Storage(#[from] DataError),
}

impl DomainError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

//! Filter type definitions
//!
//! Raw request parameters for each lookup, the parsed range token type and the
//! input error raised when a parameter cannot be compiled.

use serde::Deserialize;
use thiserror::Error;
use utoipa::IntoParams;

/// A parameter value the compiler refused to translate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for '{param}': {value:?} ({reason})")]
pub struct InputError {
    /// Query parameter name (e.g. `code_range`)
    pub param: &'static str,
    /// The offending raw value or list element
    pub value: String,
    pub reason: String,
}

impl InputError {
    pub fn new(param: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            param,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// One element of a `code_range` list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRange {
    /// `x-N`: no lower bound
    AtMost(i64),
    /// `N-x`: no upper bound
    AtLeast(i64),
    /// `N-M`: both bounds inclusive
    Between(i64, i64),
}

/// Query parameters for `GET /codes`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CodeFilterParams {
    /// Comma-separated list of codes (e.g. `110,700`)
    pub code: Option<String>,
    /// Comma-separated list of ranges (e.g. `x-200,300-350,800-x`)
    pub code_range: Option<String>,
}

/// Query parameters for `GET /neighborhoods`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NeighborhoodFilterParams {
    /// Comma-separated list of neighborhood numbers
    pub id: Option<String>,
}

/// Query parameters for `GET /incidents`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IncidentFilterParams {
    /// Earliest incident date, inclusive (`YYYY-MM-DD`)
    pub start_date: Option<String>,
    /// Latest incident date, inclusive (`YYYY-MM-DD`)
    pub end_date: Option<String>,
    /// Comma-separated list of neighborhood numbers
    pub neighborhood: Option<String>,
    /// Comma-separated list of codes
    pub code: Option<String>,
    /// Comma-separated list of police grids
    pub grid: Option<String>,
    /// Maximum number of rows (default 1000)
    pub limit: Option<String>,
}

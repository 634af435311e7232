//! Shared data types
//!
//! Query templates, bound values and result rows passed between the filter
//! compiler, the domain layer and the storage executor.

use std::fmt;

use serde::Serialize;

/// A single result row, keyed by column name (or alias)
pub type JsonRow = serde_json::Map<String, serde_json::Value>;

/// Positional value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "'{}'", v),
        }
    }
}

/// Parameterized statement: SQL template with `?` placeholders plus the
/// values bound to them, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl SqlQuery {
    pub fn new(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Number of `?` placeholders in the template
    #[cfg(test)]
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

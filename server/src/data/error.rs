//! Unified error type for data layer
//!
//! Storage-level failures, kept distinct from caller input errors so the
//! dispatcher can tell a bad request apart from a failing store.

use thiserror::Error;

/// Unified error type for data layer operations
#[derive(Error, Debug)]
pub enum DataError {
    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sqlx::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A column value could not be decoded into a result row
    #[error("Failed to decode column {column}: {reason}")]
    Decode { column: String, reason: String },
}

impl DataError {
    /// Create a decode error for a result column
    pub fn decode(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is a UNIQUE constraint violation
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlite(sqlx::Error::Database(db)) => db.is_unique_violation(),
            _ => false,
        }
    }

    /// Check if this is a connection-related error that might be transient
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Sqlite(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
            _ => false,
        }
    }
}

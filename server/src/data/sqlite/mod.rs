//! SQLite database service
//!
//! Owns the connection pool for the incident database. Opens an existing
//! database read-write; with `create_if_missing` it creates the file and
//! bootstraps the tables instead.

mod executor;
pub mod schema;

pub use sqlx::SqlitePool;

use std::time::Duration;

use sqlx::ConnectOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tracing::log::LevelFilter;

use crate::core::config::DatabaseConfig;
use crate::data::error::DataError;

/// SQLite database service
///
/// Created once at server startup and shared with every request as the
/// storage executor.
pub struct SqliteService {
    pool: SqlitePool,
}

impl SqliteService {
    /// Open the database described by `config`
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DataError> {
        let db_path = &config.path;

        if config.create_if_missing
            && let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(config.create_if_missing)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(config.busy_timeout_secs))
            .log_statements(LevelFilter::Trace);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        if config.create_if_missing {
            sqlx::query(schema::SCHEMA).execute(&pool).await?;
            tracing::debug!("Schema ensured");
        }

        tracing::debug!(path = %db_path.display(), "SqliteService initialized");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a SqliteService from an existing pool (primarily for testing)
    #[cfg(test)]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close the connection pool gracefully
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("SQLite pool closed");
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_creates_database_when_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("db").join("crime.sqlite3"),
            create_if_missing: true,
            ..DatabaseConfig::default()
        };

        let service = SqliteService::init(&config).await.unwrap();
        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
             AND name IN ('Codes', 'Neighborhoods', 'Incidents')",
        )
        .fetch_one(service.pool())
        .await
        .unwrap();
        assert_eq!(tables, 3);
        service.close().await;
    }

    #[tokio::test]
    async fn test_init_missing_database_fails_without_create() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("missing.sqlite3"),
            create_if_missing: false,
            ..DatabaseConfig::default()
        };

        assert!(SqliteService::init(&config).await.is_err());
    }
}

//! Storage executor trait
//!
//! The domain layer never touches a connection directly. It hands compiled
//! statements to a `QueryExecutor`, constructed once at startup and passed
//! around as `Arc<dyn QueryExecutor>`.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::types::{JsonRow, SqlQuery};

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a read statement and return every row
    async fn select(&self, query: &SqlQuery) -> Result<Vec<JsonRow>, DataError>;

    /// Run a write statement and return the number of affected rows
    async fn execute(&self, query: &SqlQuery) -> Result<u64, DataError>;
}

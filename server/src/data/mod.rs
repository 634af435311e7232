//! Data storage layer
//!
//! - `filters` - Compiles lookup parameters into parameterized SELECTs
//! - `sqlite` - Connection pool and the SQLite `QueryExecutor`
//! - `traits` - The executor seam the domain layer depends on
//! - `types` - Bound values, compiled statements and result rows
//! - `error` - Storage error type

pub mod error;
pub mod filters;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::DataError;
pub use sqlite::SqliteService;
pub use traits::QueryExecutor;
pub use types::{JsonRow, SqlQuery, SqlValue};

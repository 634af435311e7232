//! QueryExecutor implementation for SQLite
//!
//! Binds positional values onto sqlx queries and decodes result rows into
//! JSON objects by the runtime type SQLite reports for each value.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::data::error::DataError;
use crate::data::traits::QueryExecutor;
use crate::data::types::{JsonRow, SqlQuery, SqlValue};

use super::SqliteService;

fn bind_params(query: &SqlQuery) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    query
        .params
        .iter()
        .fold(sqlx::query(&query.sql), |q, param| match param {
            SqlValue::Integer(v) => q.bind(*v),
            SqlValue::Text(v) => q.bind(v.as_str()),
        })
}

fn row_to_json(row: &SqliteRow) -> Result<JsonRow, DataError> {
    let mut map = JsonRow::new();

    for (idx, column) in row.columns().iter().enumerate() {
        let raw = row.try_get_raw(idx)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" => Value::from(row.try_get::<i64, _>(idx)?),
                "REAL" => serde_json::Number::from_f64(row.try_get::<f64, _>(idx)?)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                "TEXT" => Value::String(row.try_get::<String, _>(idx)?),
                other => {
                    return Err(DataError::decode(
                        column.name(),
                        format!("unsupported type {}", other),
                    ));
                }
            }
        };
        map.insert(column.name().to_string(), value);
    }

    Ok(map)
}

#[async_trait]
impl QueryExecutor for SqliteService {
    async fn select(&self, query: &SqlQuery) -> Result<Vec<JsonRow>, DataError> {
        let rows = bind_params(query).fetch_all(self.pool()).await?;
        rows.iter().map(row_to_json).collect()
    }

    async fn execute(&self, query: &SqlQuery) -> Result<u64, DataError> {
        let result = bind_params(query).execute(self.pool()).await?;
        Ok(result.rows_affected())
    }
}

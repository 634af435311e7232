//! SQL query builder
//!
//! Clause fragments and their bound values travel together as `Clause`
//! values and are only flattened into a template in `QueryBuilder::build`,
//! so placeholder order always matches parameter order.

use crate::data::types::{SqlQuery, SqlValue};

/// A WHERE-clause fragment and the values bound to its placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    sql: String,
    params: Vec<SqlValue>,
}

impl Clause {
    fn compare(column: &'static str, op: &str, value: SqlValue) -> Self {
        Self {
            sql: format!("{} {} ?", column, op),
            params: vec![value],
        }
    }

    /// `column = ?`
    pub fn eq(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::compare(column, "=", value.into())
    }

    /// `column >= ?`
    pub fn gte(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::compare(column, ">=", value.into())
    }

    /// `column <= ?`
    pub fn lte(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::compare(column, "<=", value.into())
    }

    fn join(parts: Vec<Clause>, sep: &str) -> Self {
        let mut params = Vec::new();
        let fragments: Vec<String> = parts
            .into_iter()
            .map(|part| {
                params.extend(part.params);
                part.sql
            })
            .collect();
        Self {
            sql: fragments.join(sep),
            params,
        }
    }

    /// Join parts with AND, without grouping
    pub fn all_of(parts: Vec<Clause>) -> Self {
        Self::join(parts, " AND ")
    }

    /// Join parts with OR and wrap the whole disjunction in parentheses
    pub fn any_of(parts: Vec<Clause>) -> Self {
        Self::join(parts, " OR ").group()
    }

    /// Wrap this clause in parentheses
    pub fn group(self) -> Self {
        Self {
            sql: format!("({})", self.sql),
            params: self.params,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }
}

/// Assembles a SELECT statement from a fixed projection and optional clauses
#[derive(Debug)]
pub struct QueryBuilder {
    select: &'static str,
    clauses: Vec<Clause>,
    order_by: Option<&'static str>,
    limit: Option<i64>,
}

impl QueryBuilder {
    pub fn new(select: &'static str) -> Self {
        Self {
            select,
            clauses: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    /// Add a clause, AND-combined with every other clause
    pub fn filter(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Add a clause when present
    pub fn filter_opt(self, clause: Option<Clause>) -> Self {
        match clause {
            Some(clause) => self.filter(clause),
            None => self,
        }
    }

    pub fn order_by(mut self, order_by: &'static str) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Bind a row cap as the final placeholder
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> SqlQuery {
        let mut sql = String::from(self.select);
        let mut params = Vec::new();

        if !self.clauses.is_empty() {
            let conditions = Clause::all_of(self.clauses);
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.sql);
            params.extend(conditions.params);
        }

        if let Some(order_by) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }

        if let Some(limit) = self.limit {
            sql.push_str(" LIMIT ?");
            params.push(SqlValue::Integer(limit));
        }

        SqlQuery { sql, params }
    }
}

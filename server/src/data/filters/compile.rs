//! Lookup compilers
//!
//! Pure translation from request parameters to a parameterized SELECT.
//! Within one parameter, list values are OR-ed; across parameters, clauses
//! are AND-ed in a fixed order so bound values line up with placeholders.

use super::builder::{Clause, QueryBuilder};
use super::parser::{parse_date, parse_int_list, parse_limit, parse_range_list};
use crate::data::types::SqlQuery;

use super::types::{
    CodeFilterParams, CodeRange, IncidentFilterParams, InputError, NeighborhoodFilterParams,
};

/// Column names and fixed projections
pub mod columns {
    pub const CODE: &str = "code";
    pub const NEIGHBORHOOD_NUMBER: &str = "neighborhood_number";
    pub const POLICE_GRID: &str = "police_grid";
    pub const INCIDENT_DATE: &str = "date(date_time)";

    pub const SELECT_CODES: &str = "SELECT code, incident_type AS type FROM Codes";
    pub const SELECT_NEIGHBORHOODS: &str =
        "SELECT neighborhood_number AS id, neighborhood_name AS name FROM Neighborhoods";
    pub const SELECT_INCIDENTS: &str = "SELECT case_number, date(date_time) AS date, \
         time(date_time) AS time, code, incident, police_grid, neighborhood_number, block \
         FROM Incidents";

    pub const ORDER_CODES: &str = "code";
    pub const ORDER_NEIGHBORHOODS: &str = "id";
    pub const ORDER_INCIDENTS: &str = "date_time DESC";
}

/// `(col = ? OR col = ? ...)` for a comma-separated integer list
fn exact_list(
    param: &'static str,
    column: &'static str,
    raw: Option<&str>,
) -> Result<Option<Clause>, InputError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let parts = parse_int_list(param, raw)?
        .into_iter()
        .map(|v| Clause::eq(column, v))
        .collect();
    Ok(Some(Clause::any_of(parts)))
}

/// Translate one range into its own parenthesized group
fn range_clause(column: &'static str, range: CodeRange) -> Clause {
    match range {
        CodeRange::AtMost(hi) => Clause::lte(column, hi).group(),
        CodeRange::AtLeast(lo) => Clause::gte(column, lo).group(),
        CodeRange::Between(lo, hi) => {
            Clause::all_of(vec![Clause::gte(column, lo), Clause::lte(column, hi)]).group()
        }
    }
}

/// `((col <= ?) OR (col >= ? AND col <= ?) ...)` for a range list
fn range_list(
    param: &'static str,
    column: &'static str,
    raw: Option<&str>,
) -> Result<Option<Clause>, InputError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let parts = parse_range_list(param, raw)?
        .into_iter()
        .map(|range| range_clause(column, range))
        .collect();
    Ok(Some(Clause::any_of(parts)))
}

fn date_bound(
    param: &'static str,
    raw: Option<&str>,
    bound: fn(&'static str, String) -> Clause,
) -> Result<Option<Clause>, InputError> {
    raw.map(|raw| parse_date(param, raw).map(|date| bound(columns::INCIDENT_DATE, date)))
        .transpose()
}

/// Compile the reference-code lookup
pub fn compile_code_query(params: &CodeFilterParams) -> Result<SqlQuery, InputError> {
    Ok(QueryBuilder::new(columns::SELECT_CODES)
        .filter_opt(exact_list("code", columns::CODE, params.code.as_deref())?)
        .filter_opt(range_list(
            "code_range",
            columns::CODE,
            params.code_range.as_deref(),
        )?)
        .order_by(columns::ORDER_CODES)
        .build())
}

/// Compile the neighborhood lookup
pub fn compile_neighborhood_query(
    params: &NeighborhoodFilterParams,
) -> Result<SqlQuery, InputError> {
    Ok(QueryBuilder::new(columns::SELECT_NEIGHBORHOODS)
        .filter_opt(exact_list(
            "id",
            columns::NEIGHBORHOOD_NUMBER,
            params.id.as_deref(),
        )?)
        .order_by(columns::ORDER_NEIGHBORHOODS)
        .build())
}

/// Compile the incident lookup
///
/// Clause order: start_date, end_date, neighborhood, code, grid; the row cap
/// is always bound last.
pub fn compile_incident_query(params: &IncidentFilterParams) -> Result<SqlQuery, InputError> {
    let limit = parse_limit(params.limit.as_deref())?;

    Ok(QueryBuilder::new(columns::SELECT_INCIDENTS)
        .filter_opt(date_bound(
            "start_date",
            params.start_date.as_deref(),
            Clause::gte,
        )?)
        .filter_opt(date_bound(
            "end_date",
            params.end_date.as_deref(),
            Clause::lte,
        )?)
        .filter_opt(exact_list(
            "neighborhood",
            columns::NEIGHBORHOOD_NUMBER,
            params.neighborhood.as_deref(),
        )?)
        .filter_opt(exact_list("code", columns::CODE, params.code.as_deref())?)
        .filter_opt(exact_list(
            "grid",
            columns::POLICE_GRID,
            params.grid.as_deref(),
        )?)
        .order_by(columns::ORDER_INCIDENTS)
        .limit(limit)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::SqlValue;

    fn ints(values: &[i64]) -> Vec<SqlValue> {
        values.iter().copied().map(SqlValue::Integer).collect()
    }

    #[test]
    fn codes_without_filters() {
        let query = compile_code_query(&CodeFilterParams::default()).unwrap();
        assert_eq!(
            query.sql,
            "SELECT code, incident_type AS type FROM Codes ORDER BY code"
        );
        assert!(query.params.is_empty());
    }

    #[test]
    fn codes_exact_list_has_one_clause_per_value() {
        let params = CodeFilterParams {
            code: Some("110,700,1400".to_string()),
            ..Default::default()
        };
        let query = compile_code_query(&params).unwrap();
        assert_eq!(
            query.sql,
            "SELECT code, incident_type AS type FROM Codes \
             WHERE (code = ? OR code = ? OR code = ?) ORDER BY code"
        );
        assert_eq!(query.params, ints(&[110, 700, 1400]));
        assert_eq!(query.sql.matches(" OR ").count(), 2);
    }

    #[test]
    fn code_range_open_and_closed() {
        let params = CodeFilterParams {
            code_range: Some("x-200,415-500".to_string()),
            ..Default::default()
        };
        let query = compile_code_query(&params).unwrap();
        assert!(
            query
                .sql
                .contains("(code <= ?) OR (code >= ? AND code <= ?)")
        );
        assert_eq!(query.params, ints(&[200, 415, 500]));
    }

    #[test]
    fn code_range_each_token_rule() {
        let cases = [
            ("x-200", "WHERE ((code <= ?))", vec![200_i64]),
            ("800-x", "WHERE ((code >= ?))", vec![800]),
            ("300-350", "WHERE ((code >= ? AND code <= ?))", vec![300, 350]),
            ("X-200", "WHERE ((code <= ?))", vec![200]),
        ];
        for (raw, expected, values) in cases {
            let params = CodeFilterParams {
                code_range: Some(raw.to_string()),
                ..Default::default()
            };
            let query = compile_code_query(&params).unwrap();
            assert!(query.sql.contains(expected), "{raw}: {}", query.sql);
            assert_eq!(query.params, ints(&values), "{raw}");
        }
    }

    #[test]
    fn code_range_two_closed_ranges_stay_grouped() {
        let params = CodeFilterParams {
            code_range: Some("10-20,300-350".to_string()),
            ..Default::default()
        };
        let query = compile_code_query(&params).unwrap();
        assert!(
            query
                .sql
                .contains("WHERE ((code >= ? AND code <= ?) OR (code >= ? AND code <= ?))")
        );
        assert_eq!(query.params, ints(&[10, 20, 300, 350]));
    }

    #[test]
    fn code_and_code_range_combine_with_and() {
        let params = CodeFilterParams {
            code: Some("110".to_string()),
            code_range: Some("100-x".to_string()),
        };
        let query = compile_code_query(&params).unwrap();
        assert!(
            query
                .sql
                .contains("WHERE (code = ?) AND ((code >= ?)) ORDER BY code")
        );
        assert_eq!(query.params, ints(&[110, 100]));
    }

    #[test]
    fn malformed_code_range_names_parameter() {
        let params = CodeFilterParams {
            code_range: Some("x-200,abc".to_string()),
            ..Default::default()
        };
        let err = compile_code_query(&params).unwrap_err();
        assert_eq!(err.param, "code_range");
        assert_eq!(err.value, "abc");
    }

    #[test]
    fn non_integer_code_is_rejected_not_zeroed() {
        let params = CodeFilterParams {
            code: Some("110,abc".to_string()),
            ..Default::default()
        };
        let err = compile_code_query(&params).unwrap_err();
        assert_eq!(err.param, "code");
    }

    #[test]
    fn neighborhoods_by_id() {
        let params = NeighborhoodFilterParams {
            id: Some("11,14".to_string()),
        };
        let query = compile_neighborhood_query(&params).unwrap();
        assert_eq!(
            query.sql,
            "SELECT neighborhood_number AS id, neighborhood_name AS name FROM Neighborhoods \
             WHERE (neighborhood_number = ? OR neighborhood_number = ?) ORDER BY id"
        );
        assert_eq!(query.params, ints(&[11, 14]));
    }

    #[test]
    fn neighborhoods_without_filter() {
        let query = compile_neighborhood_query(&NeighborhoodFilterParams::default()).unwrap();
        assert!(!query.sql.contains("WHERE"));
        assert!(query.sql.ends_with("ORDER BY id"));
    }

    #[test]
    fn incidents_without_filters_only_limit() {
        let query = compile_incident_query(&IncidentFilterParams::default()).unwrap();
        assert!(!query.sql.contains("WHERE"));
        assert!(query.sql.ends_with("FROM Incidents ORDER BY date_time DESC LIMIT ?"));
        assert_eq!(query.params, ints(&[1000]));
    }

    #[test]
    fn incidents_all_filters_in_fixed_order() {
        let params = IncidentFilterParams {
            start_date: Some("2014-08-14".to_string()),
            end_date: Some("2014-08-20".to_string()),
            neighborhood: Some("1,2".to_string()),
            code: Some("600,641".to_string()),
            grid: Some("119".to_string()),
            limit: Some("50".to_string()),
        };
        let query = compile_incident_query(&params).unwrap();

        assert!(query.sql.ends_with(
            "FROM Incidents WHERE date(date_time) >= ? AND date(date_time) <= ? \
             AND (neighborhood_number = ? OR neighborhood_number = ?) \
             AND (code = ? OR code = ?) AND (police_grid = ?) \
             ORDER BY date_time DESC LIMIT ?"
        ));
        assert_eq!(
            query.params,
            vec![
                SqlValue::from("2014-08-14"),
                SqlValue::from("2014-08-20"),
                SqlValue::Integer(1),
                SqlValue::Integer(2),
                SqlValue::Integer(600),
                SqlValue::Integer(641),
                SqlValue::Integer(119),
                SqlValue::Integer(50),
            ]
        );
        assert_eq!(query.placeholder_count(), query.params.len());
    }

    #[test]
    fn long_code_list_binds_every_value() {
        let codes: Vec<i64> = (1..=101).collect();
        let params = IncidentFilterParams {
            code: Some(
                codes
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            ..Default::default()
        };
        let query = compile_incident_query(&params).unwrap();

        let mut expected = ints(&codes);
        expected.push(SqlValue::Integer(1000));
        assert_eq!(query.params, expected);
        assert_eq!(query.placeholder_count(), 102);
    }

    #[test]
    fn incidents_single_date_bound() {
        let params = IncidentFilterParams {
            end_date: Some("2014-08-20".to_string()),
            ..Default::default()
        };
        let query = compile_incident_query(&params).unwrap();
        assert!(query.sql.contains("WHERE date(date_time) <= ? ORDER BY"));
        assert_eq!(
            query.params,
            vec![SqlValue::from("2014-08-20"), SqlValue::Integer(1000)]
        );
    }

    #[test]
    fn incidents_invalid_inputs_name_parameter() {
        let cases = [
            (
                IncidentFilterParams {
                    grid: Some("119,north".to_string()),
                    ..Default::default()
                },
                "grid",
            ),
            (
                IncidentFilterParams {
                    limit: Some("lots".to_string()),
                    ..Default::default()
                },
                "limit",
            ),
            (
                IncidentFilterParams {
                    start_date: Some("14-08-2014".to_string()),
                    ..Default::default()
                },
                "start_date",
            ),
        ];
        for (params, expected) in cases {
            let err = compile_incident_query(&params).unwrap_err();
            assert_eq!(err.param, expected);
        }
    }
}

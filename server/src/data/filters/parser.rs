//! Filter parsing
//!
//! Turns raw parameter strings into typed values. Every failure names the
//! parameter it came from; nothing is silently defaulted.

use chrono::NaiveDate;

use super::types::{CodeRange, InputError};

/// Row cap applied to incident lookups when `limit` is absent
pub const DEFAULT_INCIDENT_LIMIT: i64 = 1000;

/// Marker for an open range bound (`x-200`, `800-x`)
const OPEN_BOUND: &str = "x";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Split a comma-separated list, trimming each element
fn split_list<'a>(param: &'static str, raw: &'a str) -> Result<Vec<&'a str>, InputError> {
    let items: Vec<&str> = raw.split(',').map(str::trim).collect();

    if items.iter().any(|item| item.is_empty()) {
        return Err(InputError::new(param, raw, "list contains an empty value"));
    }
    Ok(items)
}

/// Parse a single integer
pub fn parse_int(param: &'static str, raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InputError::new(param, raw, "expected an integer"))
}

/// Parse a comma-separated list of integers (`110,700,1400`)
pub fn parse_int_list(param: &'static str, raw: &str) -> Result<Vec<i64>, InputError> {
    split_list(param, raw)?
        .into_iter()
        .map(|item| parse_int(param, item))
        .collect()
}

/// Parse one range token: `x-N`, `N-x` or `N-M`
pub fn parse_range_token(param: &'static str, token: &str) -> Result<CodeRange, InputError> {
    let malformed = || InputError::new(param, token, "expected x-N, N-x or N-M");

    let (lo, hi) = token.split_once('-').ok_or_else(malformed)?;
    let (lo, hi) = (lo.trim(), hi.trim());
    let lo_open = lo.eq_ignore_ascii_case(OPEN_BOUND);
    let hi_open = hi.eq_ignore_ascii_case(OPEN_BOUND);

    let bound = |s: &str| s.parse::<i64>().map_err(|_| malformed());

    match (lo_open, hi_open) {
        (true, true) => Err(InputError::new(
            param,
            token,
            "a range needs at least one numeric bound",
        )),
        (true, false) => Ok(CodeRange::AtMost(bound(hi)?)),
        (false, true) => Ok(CodeRange::AtLeast(bound(lo)?)),
        (false, false) => Ok(CodeRange::Between(bound(lo)?, bound(hi)?)),
    }
}

/// Parse a comma-separated list of range tokens
pub fn parse_range_list(param: &'static str, raw: &str) -> Result<Vec<CodeRange>, InputError> {
    split_list(param, raw)?
        .into_iter()
        .map(|token| parse_range_token(param, token))
        .collect()
}

/// Validate an ISO calendar date and return it in canonical form
pub fn parse_date(param: &'static str, raw: &str) -> Result<String, InputError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| InputError::new(param, raw, "expected a date in YYYY-MM-DD format"))
}

/// Parse the row cap, falling back to the default when absent
pub fn parse_limit(raw: Option<&str>) -> Result<i64, InputError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_INCIDENT_LIMIT);
    };
    let limit = parse_int("limit", raw)?;
    if limit < 0 {
        return Err(InputError::new("limit", raw, "must not be negative"));
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_list_valid() {
        assert_eq!(parse_int_list("code", "110,700").unwrap(), vec![110, 700]);
        assert_eq!(parse_int_list("code", "600").unwrap(), vec![600]);
    }

    #[test]
    fn parse_int_list_trims_whitespace() {
        assert_eq!(parse_int_list("grid", " 119 , 120").unwrap(), vec![119, 120]);
    }

    #[test]
    fn parse_int_list_rejects_non_integer() {
        let err = parse_int_list("neighborhood", "1,two,3").unwrap_err();
        assert_eq!(err.param, "neighborhood");
        assert_eq!(err.value, "two");
    }

    #[test]
    fn parse_int_list_rejects_empty_elements() {
        assert!(parse_int_list("code", "").is_err());
        assert!(parse_int_list("code", "1,,2").is_err());
        assert!(parse_int_list("code", "1,").is_err());
    }

    #[test]
    fn parse_int_list_accepts_long_lists() {
        let raw = (1..=500)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let values = parse_int_list("id", &raw).unwrap();
        assert_eq!(values.len(), 500);
        assert_eq!(values[499], 500);
    }

    #[test]
    fn parse_range_token_open_lower() {
        assert_eq!(
            parse_range_token("code_range", "x-200").unwrap(),
            CodeRange::AtMost(200)
        );
    }

    #[test]
    fn parse_range_token_open_upper() {
        assert_eq!(
            parse_range_token("code_range", "800-x").unwrap(),
            CodeRange::AtLeast(800)
        );
    }

    #[test]
    fn parse_range_token_closed() {
        assert_eq!(
            parse_range_token("code_range", "300-350").unwrap(),
            CodeRange::Between(300, 350)
        );
    }

    #[test]
    fn parse_range_token_open_bound_is_case_insensitive() {
        assert_eq!(
            parse_range_token("code_range", "X-200").unwrap(),
            parse_range_token("code_range", "x-200").unwrap()
        );
        assert_eq!(
            parse_range_token("code_range", "800-X").unwrap(),
            CodeRange::AtLeast(800)
        );
    }

    #[test]
    fn parse_range_token_malformed() {
        for token in ["abc", "a-b", "x-x", "x-abc", "10-", "-10", "10"] {
            let err = parse_range_token("code_range", token).unwrap_err();
            assert_eq!(err.param, "code_range", "token {token}");
            assert_eq!(err.value, token);
        }
    }

    #[test]
    fn parse_range_list_mixed() {
        let ranges = parse_range_list("code_range", "x-200,300-350,415-500,800-x").unwrap();
        assert_eq!(
            ranges,
            vec![
                CodeRange::AtMost(200),
                CodeRange::Between(300, 350),
                CodeRange::Between(415, 500),
                CodeRange::AtLeast(800),
            ]
        );
    }

    #[test]
    fn parse_date_valid() {
        assert_eq!(parse_date("start_date", "2014-08-14").unwrap(), "2014-08-14");
    }

    #[test]
    fn parse_date_invalid() {
        for raw in ["08-14-2014", "2014-13-01", "yesterday", ""] {
            let err = parse_date("end_date", raw).unwrap_err();
            assert_eq!(err.param, "end_date");
        }
    }

    #[test]
    fn parse_limit_default_and_explicit() {
        assert_eq!(parse_limit(None).unwrap(), DEFAULT_INCIDENT_LIMIT);
        assert_eq!(parse_limit(Some("50")).unwrap(), 50);
        assert_eq!(parse_limit(Some("0")).unwrap(), 0);
    }

    #[test]
    fn parse_limit_invalid() {
        assert!(parse_limit(Some("fifty")).is_err());
        assert!(parse_limit(Some("-1")).is_err());
    }
}

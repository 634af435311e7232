//! Query filter compiler
//!
//! Translates optional lookup parameters into one parameterized SELECT.
//! Exact lists and range lists are OR-ed within a parameter; parameters are
//! AND-ed together. No I/O happens here.
//!
//! ## Usage
//!
//! ```
//! use crimedesk_server::data::filters::{CodeFilterParams, compile_code_query};
//!
//! let params = CodeFilterParams {
//!     code_range: Some("x-200,415-500".to_string()),
//!     ..Default::default()
//! };
//! let query = compile_code_query(&params).unwrap();
//! assert!(query.sql.contains("(code <= ?) OR (code >= ? AND code <= ?)"));
//! assert_eq!(query.params.len(), 3);
//! ```

mod builder;
mod compile;
mod parser;
mod types;

pub use builder::{Clause, QueryBuilder};
pub use compile::{
    columns, compile_code_query, compile_incident_query, compile_neighborhood_query,
};
pub use parser::{
    DEFAULT_INCIDENT_LIMIT, parse_date, parse_int, parse_int_list, parse_limit,
    parse_range_list, parse_range_token,
};
pub use types::{
    CodeFilterParams, CodeRange, IncidentFilterParams, InputError, NeighborhoodFilterParams,
};

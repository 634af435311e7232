//! Crime incident data service
//!
//! Filtered lookups over incident codes, neighborhoods and incidents, plus
//! existence-gated insert and delete of incidents, served over HTTP from a
//! single SQLite database.

pub mod api;
pub mod core;
pub mod data;
pub mod domain;

mod app;

//! SQLite schema definitions
//!
//! Applied only when the database is created by this service. Existing
//! databases are used as-is.

/// Tables for reference data and incidents
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Reference data
-- =============================================================================
CREATE TABLE IF NOT EXISTS Codes (
    code INTEGER PRIMARY KEY,
    incident_type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Neighborhoods (
    neighborhood_number INTEGER PRIMARY KEY,
    neighborhood_name TEXT NOT NULL
);

-- =============================================================================
-- Incidents (case_number is the natural key)
-- =============================================================================
CREATE TABLE IF NOT EXISTS Incidents (
    case_number INTEGER NOT NULL UNIQUE,
    date_time DATETIME NOT NULL,
    code INTEGER NOT NULL,
    incident TEXT NOT NULL,
    police_grid INTEGER NOT NULL,
    neighborhood_number INTEGER NOT NULL,
    block TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_incidents_date_time ON Incidents(date_time);
CREATE INDEX IF NOT EXISTS idx_incidents_code ON Incidents(code);
CREATE INDEX IF NOT EXISTS idx_incidents_neighborhood ON Incidents(neighborhood_number);
"#;

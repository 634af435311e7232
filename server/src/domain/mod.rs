//! Domain logic for incident data
//!
//! - `incidents` - Existence-gated insert and delete of incidents
//! - `lookups` - Filtered reads of codes, neighborhoods and incidents
//! - `error` - Error kinds reported to the API layer

pub mod error;
pub mod incidents;
pub mod lookups;

pub use error::DomainError;
pub use incidents::{IncidentGuard, NewIncident, NewIncidentRequest, RemoveIncidentRequest};
pub use lookups::{list_codes, list_incidents, list_neighborhoods};

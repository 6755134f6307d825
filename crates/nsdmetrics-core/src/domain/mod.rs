//! Domain entities
//!
//! - Enumerations shared with the consuming telemetry pipeline
//! - The `NetworkNsdReported` event record and its builder
//! - Domain and sink error types

pub mod errors;
pub mod event;
pub mod record;

// Re-export commonly used types
pub use errors::{DomainError, StatsError};
pub use event::{MdnsQueryResult, NsdEventType};
pub use record::{
    AtomField, NetworkNsdReported, NetworkNsdReportedBuilder, NETWORK_NSD_REPORTED_ATOM_ID,
    NETWORK_NSD_REPORTED_FIELD_COUNT,
};

//! Port definitions
//!
//! - [`IStatsSink`] - Destination for `NetworkNsdReported` records

pub mod stats_sink;

pub use stats_sink::IStatsSink;

//! Statistics sink port (driven/secondary port)
//!
//! A sink accepts fully built `NetworkNsdReported` records. Implementations
//! may forward them to a platform stats log, aggregate them into Prometheus
//! metrics, or append them to a local file.
//!
//! ## Design Notes
//!
//! - Writes are synchronous and expected to be cheap; buffering, if any,
//!   is the implementation's concern.
//! - There is no delivery guarantee. Callers treat writes as
//!   fire-and-forget and only log a returned error.

use crate::domain::{NetworkNsdReported, StatsError};

/// Port trait for writing NSD event records to a statistics backend
///
/// Implementations must be safe to share across threads: one sink is
/// typically held behind an `Arc` by many emitters.
pub trait IStatsSink: Send + Sync {
    /// Writes one record
    ///
    /// # Arguments
    /// * `event` - The finished record; the sink must not assume it can keep
    ///   a reference beyond the call
    fn stats_write(&self, event: &NetworkNsdReported) -> Result<(), StatsError>;
}

//! Positional stats log sink
//!
//! Flattens each record into the fixed field order of the stats log and
//! emits it as one structured `tracing` event on the `stats_log` target.
//! Whatever subscriber the host process installs is the transport.

use nsdmetrics_core::domain::{NetworkNsdReported, StatsError, NETWORK_NSD_REPORTED_ATOM_ID};
use nsdmetrics_core::ports::IStatsSink;

/// Tracing target used for stats log entries.
pub const STATS_LOG_TARGET: &str = "stats_log";

/// Default sink: writes positional atom entries to the stats log target.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsLogSink;

impl StatsLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl IStatsSink for StatsLogSink {
    fn stats_write(&self, event: &NetworkNsdReported) -> Result<(), StatsError> {
        let fields = serde_json::to_string(&event.atom_fields())?;
        tracing::info!(
            target: STATS_LOG_TARGET,
            atom_id = NETWORK_NSD_REPORTED_ATOM_ID,
            fields = %fields,
            "NetworkNsdReported"
        );
        Ok(())
    }
}

//! In-memory statistics sink
//!
//! Keeps every submitted record so tests can assert on exactly what an
//! emitter produced.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use nsdmetrics_core::domain::{NetworkNsdReported, StatsError};
use nsdmetrics_core::ports::IStatsSink;

/// Sink that records submitted events in memory.
#[derive(Debug, Default)]
pub struct RecordingStatsSink {
    records: Mutex<Vec<NetworkNsdReported>>,
    fail: AtomicBool,
}

impl RecordingStatsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every write with `StatsError::SinkUnavailable`.
    pub fn failing() -> Self {
        let sink = Self::default();
        sink.set_failing(true);
        sink
    }

    /// Toggles rejection of writes. Rejected writes are not recorded.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of recorded events in submission order.
    pub fn records(&self) -> Vec<NetworkNsdReported> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl IStatsSink for RecordingStatsSink {
    fn stats_write(&self, event: &NetworkNsdReported) -> Result<(), StatsError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StatsError::SinkUnavailable(
                "recording sink set to fail".to_string(),
            ));
        }
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        Ok(())
    }
}

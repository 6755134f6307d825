//! Prometheus metrics registry for NSD events
//!
//! Aggregates `NetworkNsdReported` records into labeled counters and a
//! duration histogram, so the same emitter can feed a scrape-based pipeline.

use nsdmetrics_core::domain::{NetworkNsdReported, StatsError};
use nsdmetrics_core::ports::IStatsSink;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Registry holding the NSD event metrics.
pub struct NsdMetricsRegistry {
    registry: Registry,
    /// Counter: events by (event_type, query_result, backend)
    pub events_total: IntCounterVec,
    /// Histogram: event duration in seconds by (event_type, query_result)
    pub event_duration_seconds: HistogramVec,
}

impl NsdMetricsRegistry {
    /// Creates a new `NsdMetricsRegistry` with all metrics registered.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new_custom(Some("nsdmetrics".to_string()), None)?;

        let events_total = IntCounterVec::new(
            Opts::new("nsd_events_total", "Total NSD events reported"),
            &["event_type", "query_result", "backend"],
        )?;
        registry.register(Box::new(events_total.clone()))?;

        // Unregistration durations span the whole registration lifetime.
        let event_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "nsd_event_duration_seconds",
                "NSD event duration in seconds",
            )
            .buckets(vec![0.01, 0.1, 1.0, 10.0, 60.0, 3600.0, f64::INFINITY]),
            &["event_type", "query_result"],
        )?;
        registry.register(Box::new(event_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            events_total,
            event_duration_seconds,
        })
    }

    /// Record one event.
    pub fn record_event(&self, event: &NetworkNsdReported) {
        let event_type = event.event_type().to_string();
        let query_result = event.query_result().to_string();
        let backend = if event.is_legacy() { "legacy" } else { "mdns" };

        self.events_total
            .with_label_values(&[event_type.as_str(), query_result.as_str(), backend])
            .inc();
        self.event_duration_seconds
            .with_label_values(&[event_type.as_str(), query_result.as_str()])
            .observe(event.event_duration_millisec() as f64 / 1000.0);
    }

    /// Encode all metrics in Prometheus text exposition format.
    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl IStatsSink for NsdMetricsRegistry {
    fn stats_write(&self, event: &NetworkNsdReported) -> Result<(), StatsError> {
        self.record_event(event);
        Ok(())
    }
}

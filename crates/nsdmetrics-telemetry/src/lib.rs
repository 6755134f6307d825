//! NSD Metrics Telemetry - NetworkNsdReported emission
//!
//! Provides:
//! - `NetworkNsdReportedMetrics`: per-client emitter for NSD outcome records
//! - `StatsLogSink`: default sink writing positional stats log entries
//! - `NsdMetricsRegistry`: Prometheus aggregation of emitted records
//! - `JsonLinesStatsSink`: append-only local record file
//! - `RecordingStatsSink`: in-memory sink for assertions
//! - `init_tracing`: subscriber setup from `LoggingConfig`

pub mod logging;
pub mod metrics;
pub mod recording;
pub mod reported;
pub mod sink;
pub mod stats_log;
pub mod store;

pub use logging::init_tracing;
pub use metrics::NsdMetricsRegistry;
pub use recording::RecordingStatsSink;
pub use reported::NetworkNsdReportedMetrics;
pub use sink::{sink_from_config, ConfiguredSink};
pub use stats_log::StatsLogSink;
pub use store::JsonLinesStatsSink;

//! Sink selection from configuration

use std::sync::Arc;

use nsdmetrics_core::config::{SinkKind, StatsConfig};
use nsdmetrics_core::ports::IStatsSink;
use tracing::info;

use crate::metrics::NsdMetricsRegistry;
use crate::stats_log::StatsLogSink;
use crate::store::JsonLinesStatsSink;

/// A sink built from configuration.
///
/// `registry` is set for the Prometheus backend so the host can encode
/// the collected metrics.
pub struct ConfiguredSink {
    pub sink: Arc<dyn IStatsSink>,
    pub registry: Option<Arc<NsdMetricsRegistry>>,
}

/// Builds the sink selected by `config.sink`.
pub fn sink_from_config(config: &StatsConfig) -> anyhow::Result<ConfiguredSink> {
    let configured = match config.sink {
        SinkKind::Log => ConfiguredSink {
            sink: Arc::new(StatsLogSink::new()),
            registry: None,
        },
        SinkKind::Prometheus => {
            let registry = Arc::new(NsdMetricsRegistry::new()?);
            ConfiguredSink {
                sink: Arc::clone(&registry) as Arc<dyn IStatsSink>,
                registry: Some(registry),
            }
        }
        SinkKind::Jsonl => ConfiguredSink {
            sink: Arc::new(JsonLinesStatsSink::new(config.jsonl_path.clone())),
            registry: None,
        },
    };
    info!(sink = %config.sink, "Statistics sink configured");
    Ok(configured)
}

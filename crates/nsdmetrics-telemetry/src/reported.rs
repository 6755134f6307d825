//! NetworkNsdReportedMetrics - per-client NSD outcome emitter
//!
//! Each NSD client creates one emitter holding its backend flag and client
//! id. Every report method builds one `NetworkNsdReported` record and makes
//! exactly one sink write. Write errors are logged via `tracing::warn!` but
//! never propagated, so lost metrics never affect the NSD operation itself.

use std::sync::Arc;

use nsdmetrics_core::domain::{
    MdnsQueryResult, NetworkNsdReported, NetworkNsdReportedBuilder, NsdEventType,
};
use nsdmetrics_core::ports::IStatsSink;
use tracing::{debug, warn};

use crate::stats_log::StatsLogSink;

/// Records NetworkNsdReported events for one NSD client.
pub struct NetworkNsdReportedMetrics {
    // Whether this client is using the legacy backend.
    is_legacy: bool,
    client_id: i32,
    sink: Arc<dyn IStatsSink>,
}

impl NetworkNsdReportedMetrics {
    /// Creates an emitter writing to the platform stats log.
    pub fn new(is_legacy: bool, client_id: i32) -> Self {
        Self::with_sink(is_legacy, client_id, Arc::new(StatsLogSink::new()))
    }

    /// Creates an emitter writing to `sink`.
    ///
    /// `client_id` is not validated; zero and negative ids are reported as-is.
    pub fn with_sink(is_legacy: bool, client_id: i32, sink: Arc<dyn IStatsSink>) -> Self {
        Self {
            is_legacy,
            client_id,
            sink,
        }
    }

    pub fn is_legacy(&self) -> bool {
        self.is_legacy
    }

    pub fn client_id(&self) -> i32 {
        self.client_id
    }

    fn make_reported_builder(&self) -> NetworkNsdReportedBuilder {
        NetworkNsdReported::builder(self.is_legacy, self.client_id)
    }

    /// Submit a record, swallowing sink errors with a tracing warning.
    fn write(&self, event: NetworkNsdReported) {
        debug!(
            client_id = event.client_id(),
            transaction_id = event.transaction_id(),
            event_type = %event.event_type(),
            query_result = %event.query_result(),
            duration_ms = event.event_duration_millisec(),
            "Reporting NSD event"
        );
        if let Err(e) = self.sink.stats_write(&event) {
            warn!(
                error = %e,
                client_id = self.client_id,
                transaction_id = event.transaction_id(),
                "Failed to write NetworkNsdReported event"
            );
        }
    }

    /// Report that a service registration succeeded.
    ///
    /// # Arguments
    /// * `transaction_id` - The transaction id of the service registration
    /// * `duration_ms` - How long the registration took to succeed
    pub fn report_service_registration_succeeded(&self, transaction_id: i32, duration_ms: i64) {
        let event = self
            .make_reported_builder()
            .transaction_id(transaction_id)
            .event_type(NsdEventType::NetRegister)
            .query_result(MdnsQueryResult::MqrServiceRegistered)
            .event_duration_millisec(duration_ms)
            .build();
        self.write(event);
    }

    /// Report that a service registration failed.
    ///
    /// # Arguments
    /// * `transaction_id` - The transaction id of the service registration
    /// * `duration_ms` - How long the registration ran before failing
    pub fn report_service_registration_failed(&self, transaction_id: i32, duration_ms: i64) {
        let event = self
            .make_reported_builder()
            .transaction_id(transaction_id)
            .event_type(NsdEventType::NetRegister)
            .query_result(MdnsQueryResult::MqrServiceRegistrationFailed)
            .event_duration_millisec(duration_ms)
            .build();
        self.write(event);
    }

    /// Report that a registered service was unregistered.
    ///
    /// # Arguments
    /// * `transaction_id` - The transaction id of the service registration
    /// * `duration_ms` - How long the service stayed registered
    pub fn report_service_unregistration(&self, transaction_id: i32, duration_ms: i64) {
        // TODO: report replied_requests_count once the advertiser exposes it.
        let event = self
            .make_reported_builder()
            .transaction_id(transaction_id)
            .event_type(NsdEventType::NetRegister)
            .query_result(MdnsQueryResult::MqrServiceUnregistered)
            .event_duration_millisec(duration_ms)
            .build();
        self.write(event);
    }
}

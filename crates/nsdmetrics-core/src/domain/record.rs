//! The `NetworkNsdReported` event record
//!
//! A record is assembled through [`NetworkNsdReportedBuilder`], which can only
//! be obtained with the session context (`is_legacy`, `client_id`) already
//! supplied. Once built, the record exposes getters only.

use serde::{Deserialize, Serialize};

use super::event::{MdnsQueryResult, NsdEventType};

/// Atom id of the NetworkNsdReported record in the stats log.
pub const NETWORK_NSD_REPORTED_ATOM_ID: i32 = 653;

/// Number of positional fields in a flattened record.
pub const NETWORK_NSD_REPORTED_FIELD_COUNT: usize = 11;

/// One positional value of a flattened record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AtomField {
    Bool(bool),
    Int32(i32),
    Int64(i64),
}

/// Outcome of one NSD operation, as written to the stats log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNsdReported {
    /// Whether the client uses the legacy backend
    is_legacy: bool,
    /// Client identifier
    client_id: i32,
    /// Transaction the event belongs to
    transaction_id: i32,
    is_known_service: bool,
    event_type: NsdEventType,
    event_duration_millisec: i64,
    query_result: MdnsQueryResult,
    found_service_count: i32,
    found_callback_count: i32,
    lost_callback_count: i32,
    replied_requests_count: i32,
}

impl NetworkNsdReported {
    /// Starts a record for the given session context.
    ///
    /// Every other field starts at its default (`false`, `0`, or the
    /// `Unknown` enum variant).
    ///
    /// # Example
    ///
    /// ```
    /// use nsdmetrics_core::domain::{MdnsQueryResult, NetworkNsdReported, NsdEventType};
    ///
    /// let record = NetworkNsdReported::builder(true, 42)
    ///     .transaction_id(5)
    ///     .event_type(NsdEventType::NetRegister)
    ///     .query_result(MdnsQueryResult::MqrServiceRegistered)
    ///     .event_duration_millisec(100)
    ///     .build();
    /// assert!(record.is_legacy());
    /// assert_eq!(record.client_id(), 42);
    /// assert_eq!(record.replied_requests_count(), 0);
    /// ```
    pub fn builder(is_legacy: bool, client_id: i32) -> NetworkNsdReportedBuilder {
        NetworkNsdReportedBuilder {
            record: NetworkNsdReported {
                is_legacy,
                client_id,
                transaction_id: 0,
                is_known_service: false,
                event_type: NsdEventType::default(),
                event_duration_millisec: 0,
                query_result: MdnsQueryResult::default(),
                found_service_count: 0,
                found_callback_count: 0,
                lost_callback_count: 0,
                replied_requests_count: 0,
            },
        }
    }

    pub fn is_legacy(&self) -> bool {
        self.is_legacy
    }

    pub fn client_id(&self) -> i32 {
        self.client_id
    }

    pub fn transaction_id(&self) -> i32 {
        self.transaction_id
    }

    pub fn is_known_service(&self) -> bool {
        self.is_known_service
    }

    pub fn event_type(&self) -> NsdEventType {
        self.event_type
    }

    pub fn event_duration_millisec(&self) -> i64 {
        self.event_duration_millisec
    }

    pub fn query_result(&self) -> MdnsQueryResult {
        self.query_result
    }

    pub fn found_service_count(&self) -> i32 {
        self.found_service_count
    }

    pub fn found_callback_count(&self) -> i32 {
        self.found_callback_count
    }

    pub fn lost_callback_count(&self) -> i32 {
        self.lost_callback_count
    }

    pub fn replied_requests_count(&self) -> i32 {
        self.replied_requests_count
    }

    /// Flattens the record into the positional order of the stats log write.
    ///
    /// Enums are encoded by their wire numbers. The order must stay in sync
    /// with the consuming pipeline's schema.
    pub fn atom_fields(&self) -> [AtomField; NETWORK_NSD_REPORTED_FIELD_COUNT] {
        [
            AtomField::Bool(self.is_legacy),
            AtomField::Int32(self.client_id),
            AtomField::Int32(self.transaction_id),
            AtomField::Bool(self.is_known_service),
            AtomField::Int32(self.event_type.number()),
            AtomField::Int64(self.event_duration_millisec),
            AtomField::Int32(self.query_result.number()),
            AtomField::Int32(self.found_service_count),
            AtomField::Int32(self.found_callback_count),
            AtomField::Int32(self.lost_callback_count),
            AtomField::Int32(self.replied_requests_count),
        ]
    }
}

/// Builder for [`NetworkNsdReported`]
#[derive(Debug, Clone)]
pub struct NetworkNsdReportedBuilder {
    record: NetworkNsdReported,
}

impl NetworkNsdReportedBuilder {
    pub fn transaction_id(mut self, transaction_id: i32) -> Self {
        self.record.transaction_id = transaction_id;
        self
    }

    pub fn is_known_service(mut self, is_known_service: bool) -> Self {
        self.record.is_known_service = is_known_service;
        self
    }

    pub fn event_type(mut self, event_type: NsdEventType) -> Self {
        self.record.event_type = event_type;
        self
    }

    pub fn event_duration_millisec(mut self, duration_ms: i64) -> Self {
        self.record.event_duration_millisec = duration_ms;
        self
    }

    pub fn query_result(mut self, query_result: MdnsQueryResult) -> Self {
        self.record.query_result = query_result;
        self
    }

    pub fn found_service_count(mut self, count: i32) -> Self {
        self.record.found_service_count = count;
        self
    }

    pub fn found_callback_count(mut self, count: i32) -> Self {
        self.record.found_callback_count = count;
        self
    }

    pub fn lost_callback_count(mut self, count: i32) -> Self {
        self.record.lost_callback_count = count;
        self
    }

    pub fn replied_requests_count(mut self, count: i32) -> Self {
        self.record.replied_requests_count = count;
        self
    }

    /// Finishes the record.
    pub fn build(self) -> NetworkNsdReported {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let record = NetworkNsdReported::builder(false, -7).build();
        assert!(!record.is_legacy());
        assert_eq!(record.client_id(), -7);
        assert_eq!(record.transaction_id(), 0);
        assert!(!record.is_known_service());
        assert_eq!(record.event_type(), NsdEventType::NetUnknown);
        assert_eq!(record.event_duration_millisec(), 0);
        assert_eq!(record.query_result(), MdnsQueryResult::MqrUnknown);
        assert_eq!(record.found_service_count(), 0);
        assert_eq!(record.found_callback_count(), 0);
        assert_eq!(record.lost_callback_count(), 0);
        assert_eq!(record.replied_requests_count(), 0);
    }

    #[test]
    fn test_builder_sets_every_field() {
        let record = NetworkNsdReported::builder(true, 10)
            .transaction_id(3)
            .is_known_service(true)
            .event_type(NsdEventType::NetDiscover)
            .event_duration_millisec(i64::MAX)
            .query_result(MdnsQueryResult::MqrServiceDiscoveryStop)
            .found_service_count(4)
            .found_callback_count(5)
            .lost_callback_count(6)
            .replied_requests_count(7)
            .build();

        assert!(record.is_known_service());
        assert_eq!(record.event_type(), NsdEventType::NetDiscover);
        assert_eq!(record.event_duration_millisec(), i64::MAX);
        assert_eq!(record.query_result(), MdnsQueryResult::MqrServiceDiscoveryStop);
        assert_eq!(record.found_service_count(), 4);
        assert_eq!(record.found_callback_count(), 5);
        assert_eq!(record.lost_callback_count(), 6);
        assert_eq!(record.replied_requests_count(), 7);
    }

    #[test]
    fn test_atom_fields_positional_order() {
        let record = NetworkNsdReported::builder(true, 42)
            .transaction_id(5)
            .event_type(NsdEventType::NetRegister)
            .event_duration_millisec(100)
            .query_result(MdnsQueryResult::MqrServiceRegistrationFailed)
            .found_callback_count(8)
            .build();

        assert_eq!(
            record.atom_fields(),
            [
                AtomField::Bool(true),
                AtomField::Int32(42),
                AtomField::Int32(5),
                AtomField::Bool(false),
                AtomField::Int32(1),
                AtomField::Int64(100),
                AtomField::Int32(3),
                AtomField::Int32(0),
                AtomField::Int32(8),
                AtomField::Int32(0),
                AtomField::Int32(0),
            ]
        );
    }

    #[test]
    fn test_atom_fields_serialize_as_plain_values() {
        let record = NetworkNsdReported::builder(false, 1)
            .event_duration_millisec(20000)
            .build();
        let json = serde_json::to_string(&record.atom_fields()).unwrap();
        assert_eq!(json, "[false,1,0,false,0,20000,0,0,0,0,0]");
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = NetworkNsdReported::builder(true, 9)
            .transaction_id(11)
            .event_type(NsdEventType::NetRegister)
            .query_result(MdnsQueryResult::MqrServiceUnregistered)
            .build();
        let json = serde_json::to_string(&record).unwrap();
        let back: NetworkNsdReported = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

//! NSD event enumerations
//!
//! Both enums mirror the numbering of the externally versioned stats schema.
//! The numbers are part of the wire format and must never be reordered.

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// Kind of NSD operation an event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NsdEventType {
    /// Unset
    NetUnknown,
    /// Service registration
    NetRegister,
    /// Service discovery
    NetDiscover,
    /// Service resolution
    NetResolve,
    /// Service info callback registration
    NetServiceInfoCallback,
}

impl NsdEventType {
    /// Returns the wire number for this event type.
    pub fn number(self) -> i32 {
        match self {
            NsdEventType::NetUnknown => 0,
            NsdEventType::NetRegister => 1,
            NsdEventType::NetDiscover => 2,
            NsdEventType::NetResolve => 3,
            NsdEventType::NetServiceInfoCallback => 4,
        }
    }

    /// Decodes a wire number.
    pub fn from_number(number: i32) -> Result<Self, DomainError> {
        match number {
            0 => Ok(NsdEventType::NetUnknown),
            1 => Ok(NsdEventType::NetRegister),
            2 => Ok(NsdEventType::NetDiscover),
            3 => Ok(NsdEventType::NetResolve),
            4 => Ok(NsdEventType::NetServiceInfoCallback),
            _ => Err(DomainError::UnknownEnumNumber {
                kind: "NsdEventType",
                number,
            }),
        }
    }
}

impl Default for NsdEventType {
    fn default() -> Self {
        NsdEventType::NetUnknown
    }
}

impl std::fmt::Display for NsdEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NsdEventType::NetUnknown => "net_unknown",
            NsdEventType::NetRegister => "net_register",
            NsdEventType::NetDiscover => "net_discover",
            NsdEventType::NetResolve => "net_resolve",
            NsdEventType::NetServiceInfoCallback => "net_service_info_callback",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of an mDNS operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MdnsQueryResult {
    /// Unset
    MqrUnknown,
    MqrServiceRegistered,
    MqrServiceUnregistered,
    MqrServiceRegistrationFailed,
    MqrServiceDiscoveryStarted,
    MqrServiceDiscoveryFailed,
    MqrServiceDiscoveryStop,
    MqrServiceResolved,
    MqrServiceResolutionFailed,
    MqrServiceResolutionStop,
    MqrServiceResolutionStopFailed,
}

impl MdnsQueryResult {
    /// Returns the wire number for this result.
    pub fn number(self) -> i32 {
        match self {
            MdnsQueryResult::MqrUnknown => 0,
            MdnsQueryResult::MqrServiceRegistered => 1,
            MdnsQueryResult::MqrServiceUnregistered => 2,
            MdnsQueryResult::MqrServiceRegistrationFailed => 3,
            MdnsQueryResult::MqrServiceDiscoveryStarted => 4,
            MdnsQueryResult::MqrServiceDiscoveryFailed => 5,
            MdnsQueryResult::MqrServiceDiscoveryStop => 6,
            MdnsQueryResult::MqrServiceResolved => 7,
            MdnsQueryResult::MqrServiceResolutionFailed => 8,
            MdnsQueryResult::MqrServiceResolutionStop => 9,
            MdnsQueryResult::MqrServiceResolutionStopFailed => 10,
        }
    }

    /// Decodes a wire number.
    pub fn from_number(number: i32) -> Result<Self, DomainError> {
        let result = match number {
            0 => MdnsQueryResult::MqrUnknown,
            1 => MdnsQueryResult::MqrServiceRegistered,
            2 => MdnsQueryResult::MqrServiceUnregistered,
            3 => MdnsQueryResult::MqrServiceRegistrationFailed,
            4 => MdnsQueryResult::MqrServiceDiscoveryStarted,
            5 => MdnsQueryResult::MqrServiceDiscoveryFailed,
            6 => MdnsQueryResult::MqrServiceDiscoveryStop,
            7 => MdnsQueryResult::MqrServiceResolved,
            8 => MdnsQueryResult::MqrServiceResolutionFailed,
            9 => MdnsQueryResult::MqrServiceResolutionStop,
            10 => MdnsQueryResult::MqrServiceResolutionStopFailed,
            _ => {
                return Err(DomainError::UnknownEnumNumber {
                    kind: "MdnsQueryResult",
                    number,
                })
            }
        };
        Ok(result)
    }
}

impl Default for MdnsQueryResult {
    fn default() -> Self {
        MdnsQueryResult::MqrUnknown
    }
}

impl std::fmt::Display for MdnsQueryResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MdnsQueryResult::MqrUnknown => "mqr_unknown",
            MdnsQueryResult::MqrServiceRegistered => "mqr_service_registered",
            MdnsQueryResult::MqrServiceUnregistered => "mqr_service_unregistered",
            MdnsQueryResult::MqrServiceRegistrationFailed => "mqr_service_registration_failed",
            MdnsQueryResult::MqrServiceDiscoveryStarted => "mqr_service_discovery_started",
            MdnsQueryResult::MqrServiceDiscoveryFailed => "mqr_service_discovery_failed",
            MdnsQueryResult::MqrServiceDiscoveryStop => "mqr_service_discovery_stop",
            MdnsQueryResult::MqrServiceResolved => "mqr_service_resolved",
            MdnsQueryResult::MqrServiceResolutionFailed => "mqr_service_resolution_failed",
            MdnsQueryResult::MqrServiceResolutionStop => "mqr_service_resolution_stop",
            MdnsQueryResult::MqrServiceResolutionStopFailed => "mqr_service_resolution_stop_failed",
        };
        write!(f, "{}", s)
    }
}

//! Domain error types
//!
//! `DomainError` covers decoding failures of the shared enumerations.
//! `StatsError` is returned by sink implementations; the emitter logs it
//! and never hands it to its caller.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A wire number that does not map to any variant of the named enum
    #[error("Unknown {kind} number: {number}")]
    UnknownEnumNumber {
        /// Name of the enumeration being decoded
        kind: &'static str,
        /// The rejected number
        number: i32,
    },
}

/// Errors raised by a statistics sink while writing a record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Writing to the underlying storage failed
    #[error("I/O error: {0}")]
    Io(String),

    /// The record could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backend cannot accept writes right now
    #[error("Sink unavailable: {0}")]
    SinkUnavailable(String),

    /// Rendering collected metrics failed
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<std::io::Error> for StatsError {
    fn from(err: std::io::Error) -> Self {
        StatsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        StatsError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::UnknownEnumNumber {
            kind: "NsdEventType",
            number: 42,
        };
        assert_eq!(err.to_string(), "Unknown NsdEventType number: 42");

        let err = StatsError::SinkUnavailable("statsd offline".to_string());
        assert_eq!(err.to_string(), "Sink unavailable: statsd offline");
    }

    #[test]
    fn test_stats_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StatsError = io.into();
        assert!(matches!(err, StatsError::Io(ref msg) if msg.contains("denied")));
    }

    #[test]
    fn test_stats_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: StatsError = json_err.into();
        assert!(matches!(err, StatsError::Serialization(_)));
    }
}

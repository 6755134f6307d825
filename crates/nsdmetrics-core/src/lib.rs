//! NSD Metrics Core - Record types and sink port
//!
//! This crate contains:
//! - **Domain types** - `NetworkNsdReported`, `NsdEventType`, `MdnsQueryResult`
//! - **Port definitions** - `IStatsSink`, the single write capability every
//!   statistics backend implements
//! - **Configuration** - YAML configuration for logging and sink selection
//!
//! # Architecture
//!
//! The domain module has no knowledge of any backend. Adapter crates
//! implement [`ports::IStatsSink`] and the emitter in `nsdmetrics-telemetry`
//! depends only on that trait.

pub mod config;
pub mod domain;
pub mod ports;

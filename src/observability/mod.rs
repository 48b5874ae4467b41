//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; level configured through `RUST_LOG`
//! - Request ID flows through all subsystems via middleware
//! - Metrics are cheap (atomic increments); the Prometheus exporter is
//!   opt-in via configuration

pub mod logging;
pub mod metrics;

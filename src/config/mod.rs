//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables / CLI flags
//!     → loader.rs (clap parse, env fallback, defaults)
//!     → GatewayConfig (typed, immutable)
//!     → shared with all subsystems at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - Every field has a default so the gateway runs with zero flags
//! - Backend addresses are plain `host:port`; the scheme is added by the
//!   connection pool when dialing

pub mod loader;
pub mod schema;

pub use loader::CliArgs;
pub use schema::{BackendsConfig, GatewayConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig};

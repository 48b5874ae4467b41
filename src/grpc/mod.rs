//! Backend RPC subsystem.
//!
//! # Data Flow
//! ```text
//! startup:
//!     BackendsConfig → pool.rs (eager dial, one channel per backend)
//!     → BackendPool shared with all route handlers
//!
//! per request:
//!     handler → BackendPool stub accessor (cheap clone, shared channel)
//!     → typed gRPC call under the per-call deadline
//! ```
//!
//! # Design Decisions
//! - Exactly one channel per backend for the process lifetime; stub clones
//!   multiplex over it
//! - Startup fails hard if any backend is unreachable (no partial pool)
//! - Teardown is ownership-based: dropping the pool closes the channels

pub mod pool;
pub mod proto;

pub use pool::{BackendPool, PoolError};

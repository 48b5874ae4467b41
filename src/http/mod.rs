//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route table, state injection)
//!     → middleware (CORS preflight, request ID, trace, timeout)
//!     → handlers (parse → backend call → translate)
//!     → JSON response to client
//! ```

pub mod middleware;
pub mod server;

pub use server::{build_router, AppState, HttpServer};

//! REST to gRPC request-routing gateway.
//!
//! # Architecture Overview
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │                 API GATEWAY                   │
//!                 │                                               │
//!  Client JSON    │  ┌────────┐   ┌──────────┐   ┌────────────┐  │
//!  ───────────────┼─▶│ router │──▶│ handlers │──▶│  backend   │──┼──▶ order /
//!                 │  │ + CORS │   │ validate │   │    pool    │  │    inventory /
//!  Client JSON    │  │  + ids │   │ translate│   │ (one gRPC  │  │    notification
//!  ◀──────────────┼──│        │◀──│  errors  │◀──│ channel per│◀─┼─── services
//!                 │  └────────┘   └──────────┘   │  backend)  │  │
//!                 │                              └────────────┘  │
//!                 │  ┌─────────────────────────────────────────┐ │
//!                 │  │ cross-cutting: config · observability   │ │
//!                 │  └─────────────────────────────────────────┘ │
//!                 └──────────────────────────────────────────────┘
//! ```
//!
//! Each inbound request maps to exactly one backend RPC under a fixed
//! deadline; the gateway is stateless across requests and performs no
//! retries, caching, or authentication.

pub mod config;
pub mod grpc;
pub mod handlers;
pub mod http;
pub mod observability;

pub use config::GatewayConfig;
pub use grpc::BackendPool;
pub use http::HttpServer;

//! Cross-cutting request middleware.

pub mod cors;
pub mod request_id;

pub use cors::cors_middleware;
pub use request_id::{request_id_middleware, X_REQUEST_ID};

//! Route handlers, one per REST operation.
//!
//! # Data Flow
//! ```text
//! Router dispatch
//!     → parse path/query/body, validate structure (400 on failure)
//!     → build the backend request (1:1 field mapping)
//!     → call the stub under the per-call deadline
//!     → translate result: 404 on a reported not-found,
//!       500 on transport failure or deadline, 200/201 on success
//! ```
//!
//! # Design Decisions
//! - Handlers never touch pool lifecycle; they clone stubs from shared state
//! - The deadline is a scoped `tokio::time::timeout`; every exit path drops
//!   the call future and with it the in-flight stream
//! - No retries: a failed call surfaces immediately and the client decides

pub mod error;
pub mod inventory;
pub mod notifications;
pub mod orders;

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

pub use error::GatewayError;

/// Page size applied when the `limit` query parameter is absent.
pub const DEFAULT_PAGE_LIMIT: i32 = 10;

/// Parsed pagination query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i32,
    pub offset: i32,
}

impl Pagination {
    /// Extract `limit`/`offset` from the raw query map.
    ///
    /// An absent parameter takes its declared default (limit 10, offset 0).
    /// A present but non-numeric value degrades to 0 instead of rejecting
    /// the request; existing clients depend on the lenient parse.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        Self {
            limit: parse_or_zero(params.get("limit"), DEFAULT_PAGE_LIMIT),
            offset: parse_or_zero(params.get("offset"), 0),
        }
    }
}

fn parse_or_zero(value: Option<&String>, default: i32) -> i32 {
    match value {
        None => default,
        Some(raw) => raw.parse().unwrap_or(0),
    }
}

/// Run a backend call under a fixed deadline.
///
/// On expiry the call future is dropped, which aborts the underlying HTTP/2
/// stream so the backend learns the caller is gone (best effort). Resources
/// are released on every exit path because the timeout owns the future.
pub(crate) async fn call_with_deadline<T, F>(deadline: Duration, call: F) -> Result<T, GatewayError>
where
    F: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(Ok(response)) => Ok(response.into_inner()),
        Ok(Err(status)) => Err(GatewayError::Backend(status.to_string())),
        Err(_) => Err(GatewayError::DeadlineExceeded(deadline)),
    }
}

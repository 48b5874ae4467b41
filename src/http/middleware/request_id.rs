//! Request ID middleware.
//!
//! Assigns a UUID v4 `x-request-id` when the client did not supply one and
//! echoes it on the response, so one identifier correlates gateway logs with
//! client reports.

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

pub async fn request_id_middleware(mut req: Request<Body>, next: Next) -> Response {
    let request_id = match req.headers().get(X_REQUEST_ID) {
        Some(value) => value.clone(),
        None => {
            let generated = Uuid::new_v4().to_string();
            // UUID text is always a valid header value.
            let value = HeaderValue::from_str(&generated)
                .unwrap_or_else(|_| HeaderValue::from_static("invalid"));
            req.headers_mut().insert(X_REQUEST_ID, value.clone());
            value
        }
    };

    let mut response = next.run(req).await;
    response.headers_mut().insert(X_REQUEST_ID, request_id);
    response
}

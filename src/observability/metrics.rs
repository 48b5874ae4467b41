//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define gateway metrics (request rate, latency, status classes)
//! - Expose a Prometheus-compatible scrape endpoint when configured
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method, route, status
//! - `gateway_request_duration_seconds` (histogram): latency distribution

use std::net::SocketAddr;
use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given scrape address.
pub fn init_exporter(addr: SocketAddr) {
    if let Err(error) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::error!(%error, address = %addr, "Failed to install metrics exporter");
    } else {
        tracing::info!(address = %addr, "Metrics exporter listening");
    }
}

/// Route-layer middleware recording one observation per matched request.
pub async fn track_requests(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    counter!(
        "gateway_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status,
    )
    .increment(1);
    histogram!(
        "gateway_request_duration_seconds",
        "method" => method,
        "route" => route,
    )
    .record(start.elapsed().as_secs_f64());

    response
}

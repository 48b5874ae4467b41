//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all route handlers
//! - Inject shared state (backend pool, per-call deadline)
//! - Wire up middleware (CORS, request ID, trace, request timeout)
//! - Serve with graceful shutdown

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{middleware, Json, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::grpc::BackendPool;
use crate::handlers::{inventory, notifications, orders};
use crate::http::middleware::{cors_middleware, request_id_middleware};
use crate::observability::metrics;

/// Application state injected into handlers.
///
/// The pool is cloned per request; clones are thin handles over the same
/// per-backend channels, so handlers share connections without locking.
#[derive(Clone)]
pub struct AppState {
    pub pool: BackendPool,
    pub rpc_deadline: Duration,
}

impl AppState {
    pub fn new(pool: BackendPool, rpc_deadline: Duration) -> Self {
        Self { pool, rpc_deadline }
    }
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server over an already-connected backend pool.
    pub fn new(config: GatewayConfig, pool: BackendPool) -> Self {
        let state = AppState::new(
            pool,
            Duration::from_secs(config.timeouts.rpc_deadline_secs),
        );
        let router = build_router(state, Duration::from_secs(config.timeouts.request_secs));
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Build the Axum router with all routes and middleware layers.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        .route(
            "/orders",
            post(orders::create_order).get(orders::list_orders),
        )
        .route("/orders/{id}", get(orders::get_order))
        .route("/orders/{id}/status", put(orders::update_order_status))
        .route(
            "/inventory/products",
            get(inventory::list_products).post(inventory::add_product),
        )
        .route("/inventory/products/{id}", get(inventory::get_stock))
        .route(
            "/inventory/products/{id}/stock",
            put(inventory::update_stock),
        )
        .route("/notifications", get(notifications::get_notifications));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .route_layer(middleware::from_fn(metrics::track_requests))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
}

/// `GET /health` — liveness probe, no backend involvement.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": "api-gateway",
        })),
    )
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

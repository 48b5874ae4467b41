//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits so a loaded config can be dumped for
//! diagnostics.

use serde::{Deserialize, Serialize};

/// Root configuration for the API gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Backend service endpoints.
    pub backends: BackendsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Backend service endpoints, fixed for the process lifetime.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendsConfig {
    /// Order service address (host:port).
    pub order_addr: String,

    /// Inventory service address (host:port).
    pub inventory_addr: String,

    /// Notification service address (host:port).
    pub notification_addr: String,
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            order_addr: "order-service:50051".to_string(),
            inventory_addr: "inventory-service:50052".to_string(),
            notification_addr: "notification-service:50053".to_string(),
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Backend connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Whole-request timeout (inbound HTTP) in seconds.
    pub request_secs: u64,

    /// Per-call deadline for backend RPCs in seconds.
    pub rpc_deadline_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
            rpc_deadline_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Prometheus exporter bind address. The exporter is disabled when unset.
    pub metrics_address: Option<String>,
}

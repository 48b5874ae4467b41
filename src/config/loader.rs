//! Configuration loading from CLI flags and environment variables.

use clap::Parser;

use crate::config::schema::{
    BackendsConfig, GatewayConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig,
};

/// Command-line arguments, each overridable via environment variable.
#[derive(Debug, Parser)]
#[command(name = "api-gateway", about = "REST to gRPC request-routing gateway")]
pub struct CliArgs {
    /// Port the HTTP listener binds on.
    #[arg(long, env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Order service address (host:port).
    #[arg(long, env = "ORDER_SERVICE_ADDR", default_value = "order-service:50051")]
    pub order_service_addr: String,

    /// Inventory service address (host:port).
    #[arg(
        long,
        env = "INVENTORY_SERVICE_ADDR",
        default_value = "inventory-service:50052"
    )]
    pub inventory_service_addr: String,

    /// Notification service address (host:port).
    #[arg(
        long,
        env = "NOTIFICATION_SERVICE_ADDR",
        default_value = "notification-service:50053"
    )]
    pub notification_service_addr: String,

    /// Per-call deadline for backend RPCs, in seconds.
    #[arg(long, env = "RPC_DEADLINE_SECS", default_value_t = 10)]
    pub rpc_deadline_secs: u64,

    /// Backend connection establishment timeout, in seconds.
    #[arg(long, env = "CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout for inbound HTTP, in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Prometheus exporter bind address (e.g., "0.0.0.0:9090").
    #[arg(long, env = "METRICS_ADDR")]
    pub metrics_addr: Option<String>,
}

impl From<CliArgs> for GatewayConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            listener: ListenerConfig {
                bind_address: format!("0.0.0.0:{}", args.port),
            },
            backends: BackendsConfig {
                order_addr: args.order_service_addr,
                inventory_addr: args.inventory_service_addr,
                notification_addr: args.notification_service_addr,
            },
            timeouts: TimeoutConfig {
                connect_secs: args.connect_timeout_secs,
                request_secs: args.request_timeout_secs,
                rpc_deadline_secs: args.rpc_deadline_secs,
            },
            observability: ObservabilityConfig {
                metrics_address: args.metrics_addr,
            },
        }
    }
}

//! Gateway entry point.
//!
//! Startup order matters: configuration first, then the backend pool (any
//! connect failure is fatal and the listener never binds), then the HTTP
//! server. The pool is dropped when the server future resolves, closing
//! every backend channel exactly once.

use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use api_gateway::config::{CliArgs, GatewayConfig};
use api_gateway::grpc::BackendPool;
use api_gateway::http::HttpServer;
use api_gateway::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let config = GatewayConfig::from(CliArgs::parse());

    logging::init();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        order_addr = %config.backends.order_addr,
        inventory_addr = %config.backends.inventory_addr,
        notification_addr = %config.backends.notification_addr,
        rpc_deadline_secs = config.timeouts.rpc_deadline_secs,
        "Configuration loaded"
    );

    // Fatal startup condition: every backend must be reachable before the
    // gateway serves traffic.
    let pool = BackendPool::connect(
        &config.backends,
        Duration::from_secs(config.timeouts.connect_secs),
    )
    .await
    .inspect_err(|error| tracing::error!(%error, "Backend pool initialization failed"))?;

    if let Some(metrics_address) = &config.observability.metrics_address {
        match metrics_address.parse() {
            Ok(addr) => metrics::init_exporter(addr),
            Err(_) => tracing::error!(
                metrics_address = %metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config, pool);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! Backend connection pool.
//!
//! # Responsibilities
//! - Establish one long-lived gRPC channel per backend service at startup
//! - Hand out typed call stubs to route handlers
//! - Close every channel exactly once, when the pool is dropped at shutdown
//!
//! # Design Decisions
//! - Dialing is eager: by the time `connect` returns, every stub is valid,
//!   and a single unreachable backend aborts startup (no partial pool)
//! - Stub accessors return clones; tonic clients are thin handles over the
//!   shared channel, so concurrent handlers never contend on pool state
//! - No close method: handlers never own the pool, and dropping it at the
//!   end of `main` releases each connection

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};

use crate::config::BackendsConfig;
use crate::grpc::proto::inventory::inventory_service_client::InventoryServiceClient;
use crate::grpc::proto::notification::notification_service_client::NotificationServiceClient;
use crate::grpc::proto::order::order_service_client::OrderServiceClient;

/// Startup failure while building the pool.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// The configured address could not be parsed into an endpoint URI.
    #[error("invalid {service} address `{addr}`: {source}")]
    InvalidAddress {
        service: &'static str,
        addr: String,
        source: tonic::transport::Error,
    },

    /// The endpoint was syntactically valid but unreachable.
    #[error("failed to connect to {service} at {addr}: {source}")]
    Connect {
        service: &'static str,
        addr: String,
        source: tonic::transport::Error,
    },
}

/// One gRPC channel per backend service, shared by all route handlers.
#[derive(Debug, Clone)]
pub struct BackendPool {
    orders: OrderServiceClient<Channel>,
    inventory: InventoryServiceClient<Channel>,
    notifications: NotificationServiceClient<Channel>,
}

impl BackendPool {
    /// Dial every configured backend. Fails if any endpoint is unreachable;
    /// the caller must treat that as fatal and not begin serving traffic.
    pub async fn connect(
        backends: &BackendsConfig,
        connect_timeout: Duration,
    ) -> Result<Self, PoolError> {
        let orders = OrderServiceClient::new(
            dial("order", &backends.order_addr, connect_timeout).await?,
        );
        tracing::info!(addr = %backends.order_addr, "Connected to order service");

        let inventory = InventoryServiceClient::new(
            dial("inventory", &backends.inventory_addr, connect_timeout).await?,
        );
        tracing::info!(addr = %backends.inventory_addr, "Connected to inventory service");

        let notifications = NotificationServiceClient::new(
            dial("notification", &backends.notification_addr, connect_timeout).await?,
        );
        tracing::info!(addr = %backends.notification_addr, "Connected to notification service");

        Ok(Self {
            orders,
            inventory,
            notifications,
        })
    }

    /// Stub for the order service.
    pub fn orders(&self) -> OrderServiceClient<Channel> {
        self.orders.clone()
    }

    /// Stub for the inventory service.
    pub fn inventory(&self) -> InventoryServiceClient<Channel> {
        self.inventory.clone()
    }

    /// Stub for the notification service.
    pub fn notifications(&self) -> NotificationServiceClient<Channel> {
        self.notifications.clone()
    }
}

/// Establish a channel to `addr`, eagerly, with a bounded connect time.
async fn dial(
    service: &'static str,
    addr: &str,
    connect_timeout: Duration,
) -> Result<Channel, PoolError> {
    let endpoint = Endpoint::from_shared(format!("http://{}", addr))
        .map_err(|source| PoolError::InvalidAddress {
            service,
            addr: addr.to_string(),
            source,
        })?
        .connect_timeout(connect_timeout);

    endpoint
        .connect()
        .await
        .map_err(|source| PoolError::Connect {
            service,
            addr: addr.to_string(),
            source,
        })
}

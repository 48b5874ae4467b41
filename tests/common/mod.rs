//! Shared utilities for integration testing.
//!
//! Spins up programmable in-process gRPC backends on ephemeral ports and
//! builds a gateway router wired to them, so tests drive the full path:
//! HTTP request → handler → pool stub → mock backend → HTTP response.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

use api_gateway::config::BackendsConfig;
use api_gateway::grpc::proto::inventory;
use api_gateway::grpc::proto::inventory::inventory_service_server::{
    InventoryService, InventoryServiceServer,
};
use api_gateway::grpc::proto::notification;
use api_gateway::grpc::proto::notification::notification_service_server::{
    NotificationService, NotificationServiceServer,
};
use api_gateway::grpc::proto::order;
use api_gateway::grpc::proto::order::order_service_server::{OrderService, OrderServiceServer};
use api_gateway::grpc::BackendPool;
use api_gateway::http::{build_router, AppState};

/// Programmable order backend.
#[derive(Clone, Default)]
pub struct MockOrderService {
    pub calls: Arc<AtomicUsize>,
    pub last_create: Arc<Mutex<Option<order::CreateOrderRequest>>>,
    pub last_list: Arc<Mutex<Option<order::ListOrdersRequest>>>,
    pub response: Arc<Mutex<order::OrderResponse>>,
    pub delay: Arc<Mutex<Option<Duration>>>,
}

impl MockOrderService {
    pub fn with_response(response: order::OrderResponse) -> Self {
        let mock = Self::default();
        *mock.response.lock().unwrap() = response;
        mock
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    async fn observe(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn unary_response(&self) -> order::OrderResponse {
        self.response.lock().unwrap().clone()
    }
}

#[tonic::async_trait]
impl OrderService for MockOrderService {
    async fn create_order(
        &self,
        request: Request<order::CreateOrderRequest>,
    ) -> Result<Response<order::OrderResponse>, Status> {
        *self.last_create.lock().unwrap() = Some(request.into_inner());
        self.observe().await;
        Ok(Response::new(self.unary_response()))
    }

    async fn get_order(
        &self,
        _request: Request<order::GetOrderRequest>,
    ) -> Result<Response<order::OrderResponse>, Status> {
        self.observe().await;
        Ok(Response::new(self.unary_response()))
    }

    async fn list_orders(
        &self,
        request: Request<order::ListOrdersRequest>,
    ) -> Result<Response<order::ListOrdersResponse>, Status> {
        *self.last_list.lock().unwrap() = Some(request.into_inner());
        self.observe().await;
        Ok(Response::new(order::ListOrdersResponse {
            orders: vec![],
            total: 0,
        }))
    }

    async fn update_order_status(
        &self,
        _request: Request<order::UpdateOrderStatusRequest>,
    ) -> Result<Response<order::OrderResponse>, Status> {
        self.observe().await;
        Ok(Response::new(self.unary_response()))
    }
}

/// Programmable inventory backend.
#[derive(Clone, Default)]
pub struct MockInventoryService {
    pub calls: Arc<AtomicUsize>,
    pub last_list: Arc<Mutex<Option<inventory::ListProductsRequest>>>,
    pub stock_response: Arc<Mutex<inventory::StockResponse>>,
    pub product_response: Arc<Mutex<inventory::ProductResponse>>,
}

impl MockInventoryService {
    pub fn with_stock_response(response: inventory::StockResponse) -> Self {
        let mock = Self::default();
        *mock.stock_response.lock().unwrap() = response;
        mock
    }
}

#[tonic::async_trait]
impl InventoryService for MockInventoryService {
    async fn list_products(
        &self,
        request: Request<inventory::ListProductsRequest>,
    ) -> Result<Response<inventory::ListProductsResponse>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_list.lock().unwrap() = Some(request.into_inner());
        Ok(Response::new(inventory::ListProductsResponse {
            products: vec![],
            total: 0,
        }))
    }

    async fn add_product(
        &self,
        _request: Request<inventory::AddProductRequest>,
    ) -> Result<Response<inventory::ProductResponse>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Response::new(self.product_response.lock().unwrap().clone()))
    }

    async fn get_stock(
        &self,
        _request: Request<inventory::GetStockRequest>,
    ) -> Result<Response<inventory::StockResponse>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Response::new(self.stock_response.lock().unwrap().clone()))
    }

    async fn update_stock(
        &self,
        _request: Request<inventory::UpdateStockRequest>,
    ) -> Result<Response<inventory::StockResponse>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Response::new(self.stock_response.lock().unwrap().clone()))
    }
}

/// Programmable notification backend.
#[derive(Clone, Default)]
pub struct MockNotificationService {
    pub calls: Arc<AtomicUsize>,
    pub last_get: Arc<Mutex<Option<notification::GetNotificationsRequest>>>,
}

#[tonic::async_trait]
impl NotificationService for MockNotificationService {
    async fn get_notifications(
        &self,
        request: Request<notification::GetNotificationsRequest>,
    ) -> Result<Response<notification::NotificationsResponse>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_get.lock().unwrap() = Some(request.into_inner());
        Ok(Response::new(notification::NotificationsResponse {
            notifications: vec![],
            total: 0,
        }))
    }

    async fn send_order_notification(
        &self,
        _request: Request<notification::OrderNotificationRequest>,
    ) -> Result<Response<notification::StatusResponse>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Response::new(notification::StatusResponse {
            success: true,
            message: "Notification sent successfully".to_string(),
        }))
    }

    async fn send_stock_alert(
        &self,
        _request: Request<notification::StockAlertRequest>,
    ) -> Result<Response<notification::StatusResponse>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Response::new(notification::StatusResponse {
            success: true,
            message: "Alert sent successfully".to_string(),
        }))
    }
}

async fn spawn_order_backend(service: MockOrderService) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(OrderServiceServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}

async fn spawn_inventory_backend(service: MockInventoryService) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(InventoryServiceServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}

async fn spawn_notification_backend(service: MockNotificationService) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(NotificationServiceServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}

/// A gateway router wired to in-process mock backends, plus handles to
/// inspect what each backend observed.
pub struct TestGateway {
    pub router: Router,
    pub pool: BackendPool,
    pub orders: MockOrderService,
    pub inventory: MockInventoryService,
    pub notifications: MockNotificationService,
}

/// Build a gateway over fresh mocks with the reference 10 s deadline.
pub async fn gateway() -> TestGateway {
    gateway_with(
        MockOrderService::default(),
        MockInventoryService::default(),
        MockNotificationService::default(),
        Duration::from_secs(10),
    )
    .await
}

/// Build a gateway over the given mocks and per-call deadline.
pub async fn gateway_with(
    orders: MockOrderService,
    inventory: MockInventoryService,
    notifications: MockNotificationService,
    rpc_deadline: Duration,
) -> TestGateway {
    let order_addr = spawn_order_backend(orders.clone()).await;
    let inventory_addr = spawn_inventory_backend(inventory.clone()).await;
    let notification_addr = spawn_notification_backend(notifications.clone()).await;

    let backends = BackendsConfig {
        order_addr: order_addr.to_string(),
        inventory_addr: inventory_addr.to_string(),
        notification_addr: notification_addr.to_string(),
    };

    let pool = BackendPool::connect(&backends, Duration::from_secs(5))
        .await
        .expect("mock backends must be reachable");

    let router = build_router(
        AppState::new(pool.clone(), rpc_deadline),
        Duration::from_secs(30),
    );

    TestGateway {
        router,
        pool,
        orders,
        inventory,
        notifications,
    }
}

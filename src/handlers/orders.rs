//! Order endpoints: create, get, list, update status.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::grpc::proto::order;
use crate::handlers::{call_with_deadline, GatewayError, Pagination};
use crate::http::server::AppState;

/// Request body for `POST /api/v1/orders`.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub items: Vec<OrderItemRequest>,
}

/// One line item in an order-creation request.
#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Request body for `PUT /api/v1/orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

impl CreateOrderRequest {
    fn validate(&self) -> Result<(), GatewayError> {
        if self.customer_name.is_empty() {
            return Err(GatewayError::validation("customer_name is required"));
        }
        if self.items.is_empty() {
            return Err(GatewayError::validation(
                "items must contain at least one entry",
            ));
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.product_id.is_empty() {
                return Err(GatewayError::validation(format!(
                    "items[{index}].product_id is required"
                )));
            }
            if item.product_name.is_empty() {
                return Err(GatewayError::validation(format!(
                    "items[{index}].product_name is required"
                )));
            }
            if item.quantity < 1 {
                return Err(GatewayError::validation(format!(
                    "items[{index}].quantity must be at least 1"
                )));
            }
            if item.price < 0.0 {
                return Err(GatewayError::validation(format!(
                    "items[{index}].price must not be negative"
                )));
            }
        }
        Ok(())
    }
}

impl UpdateStatusRequest {
    fn validate(&self) -> Result<(), GatewayError> {
        if self.status.is_empty() {
            return Err(GatewayError::validation("status is required"));
        }
        Ok(())
    }
}

/// `POST /api/v1/orders`
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(request) = payload.map_err(|rejection| GatewayError::Validation(rejection.body_text()))?;
    request.validate()?;

    let rpc_request = order::CreateOrderRequest {
        customer_name: request.customer_name,
        items: request
            .items
            .into_iter()
            .map(|item| order::OrderItem {
                product_id: item.product_id,
                product_name: item.product_name,
                quantity: item.quantity,
                price: item.price,
            })
            .collect(),
    };

    let mut client = state.pool.orders();
    let response =
        call_with_deadline(state.rpc_deadline, client.create_order(rpc_request)).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /api/v1/orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let rpc_request = order::GetOrderRequest { order_id };

    let mut client = state.pool.orders();
    let response = call_with_deadline(state.rpc_deadline, client.get_order(rpc_request)).await?;

    if !response.success {
        return Err(GatewayError::NotFound(response.message));
    }

    Ok(Json(response))
}

/// `GET /api/v1/orders`
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, GatewayError> {
    let page = Pagination::from_query(&params);
    let rpc_request = order::ListOrdersRequest {
        limit: page.limit,
        offset: page.offset,
    };

    let mut client = state.pool.orders();
    let response = call_with_deadline(state.rpc_deadline, client.list_orders(rpc_request)).await?;

    Ok(Json(response))
}

/// `PUT /api/v1/orders/{id}/status`
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(request) = payload.map_err(|rejection| GatewayError::Validation(rejection.body_text()))?;
    request.validate()?;

    let rpc_request = order::UpdateOrderStatusRequest {
        order_id,
        status: request.status,
    };

    let mut client = state.pool.orders();
    let response =
        call_with_deadline(state.rpc_deadline, client.update_order_status(rpc_request)).await?;

    Ok(Json(response))
}

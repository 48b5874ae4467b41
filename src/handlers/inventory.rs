//! Inventory endpoints: list products, add product, get and update stock.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::grpc::proto::inventory;
use crate::handlers::{call_with_deadline, GatewayError, Pagination};
use crate::http::server::AppState;

/// Request body for `POST /api/v1/inventory/products`.
#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

/// Request body for `PUT /api/v1/inventory/products/{id}/stock`.
#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub quantity_change: i32,
}

impl AddProductRequest {
    fn validate(&self) -> Result<(), GatewayError> {
        if self.name.is_empty() {
            return Err(GatewayError::validation("name is required"));
        }
        if self.price < 0.0 {
            return Err(GatewayError::validation("price must not be negative"));
        }
        if self.quantity < 0 {
            return Err(GatewayError::validation("quantity must not be negative"));
        }
        Ok(())
    }
}

/// `GET /api/v1/inventory/products`
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, GatewayError> {
    let page = Pagination::from_query(&params);
    let rpc_request = inventory::ListProductsRequest {
        limit: page.limit,
        offset: page.offset,
    };

    let mut client = state.pool.inventory();
    let response =
        call_with_deadline(state.rpc_deadline, client.list_products(rpc_request)).await?;

    Ok(Json(response))
}

/// `POST /api/v1/inventory/products`
pub async fn add_product(
    State(state): State<AppState>,
    payload: Result<Json<AddProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(request) = payload.map_err(|rejection| GatewayError::Validation(rejection.body_text()))?;
    request.validate()?;

    let rpc_request = inventory::AddProductRequest {
        name: request.name,
        description: request.description,
        price: request.price,
        quantity: request.quantity,
    };

    let mut client = state.pool.inventory();
    let response = call_with_deadline(state.rpc_deadline, client.add_product(rpc_request)).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /api/v1/inventory/products/{id}`
pub async fn get_stock(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let rpc_request = inventory::GetStockRequest { product_id };

    let mut client = state.pool.inventory();
    let response = call_with_deadline(state.rpc_deadline, client.get_stock(rpc_request)).await?;

    if !response.success {
        return Err(GatewayError::NotFound(response.message));
    }

    Ok(Json(response))
}

/// `PUT /api/v1/inventory/products/{id}/stock`
pub async fn update_stock(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<UpdateStockRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(request) = payload.map_err(|rejection| GatewayError::Validation(rejection.body_text()))?;

    let rpc_request = inventory::UpdateStockRequest {
        product_id,
        quantity_change: request.quantity_change,
    };

    let mut client = state.pool.inventory();
    let response = call_with_deadline(state.rpc_deadline, client.update_stock(rpc_request)).await?;

    Ok(Json(response))
}

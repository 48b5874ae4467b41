//! Notification endpoints: paginated read of the notification log.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::grpc::proto::notification;
use crate::handlers::{call_with_deadline, GatewayError, Pagination};
use crate::http::server::AppState;

/// `GET /api/v1/notifications`
pub async fn get_notifications(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, GatewayError> {
    let page = Pagination::from_query(&params);
    let rpc_request = notification::GetNotificationsRequest {
        limit: page.limit,
        offset: page.offset,
    };

    let mut client = state.pool.notifications();
    let response =
        call_with_deadline(state.rpc_deadline, client.get_notifications(rpc_request)).await?;

    Ok(Json(response))
}

//! Error translation between backend failures and client-visible responses.
//!
//! # Responsibilities
//! - Classify failures into the gateway taxonomy (validation, not-found,
//!   transport/backend, deadline)
//! - Render every error as a `{"error": "<message>"}` JSON body with the
//!   matching HTTP status

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Client-visible failure of a single gateway request.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The inbound request failed structural validation; no backend call
    /// was made.
    #[error("{0}")]
    Validation(String),

    /// The backend explicitly reported that the entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Transport or backend failure (unreachable, connection-level error,
    /// backend-side error status). Not retried by the gateway.
    #[error("{0}")]
    Backend(String),

    /// The backend call did not complete within the per-call deadline.
    #[error("backend call exceeded the {}s deadline", .0.as_secs())]
    DeadlineExceeded(Duration),
}

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Backend(_) | Self::DeadlineExceeded(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Backend call failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

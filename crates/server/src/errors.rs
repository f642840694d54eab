use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error};

use service::errors::ServiceError;

/// Service failure carried to the HTTP boundary, rendered as an error
/// notice. The web layer does no interpretation beyond the status mapping.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Db(_) | ServiceError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Rule violations surface their own wording; infrastructure errors
        // keep the taxonomy prefix from Display.
        let message = match &self.0 {
            ServiceError::Validation(m)
            | ServiceError::NotFound(m)
            | ServiceError::Conflict(m) => m.clone(),
            other => other.to_string(),
        };
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            debug!(error = %self.0, "request rejected");
        }
        let body = json!({
            "success": false,
            "severity": "error",
            "message": message,
            "data": null,
        });
        (status, Json(body)).into_response()
    }
}

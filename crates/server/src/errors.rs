use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Translates service failures into HTTP responses carrying a
/// `{"message": ...}` body.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ServiceError::Model(ModelError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            other => {
                let msg = other.to_string();
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

//! HTTP error response mapping.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use smartfridge_domain::error::{SmartFridgeError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SmartFridgeError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(SmartFridgeError);

impl From<SmartFridgeError> for ApiError {
    fn from(err: SmartFridgeError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedPayload(rejection.body_text()).into()
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ValidationError::MalformedPayload(err.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SmartFridgeError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SmartFridgeError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SmartFridgeError::Upstream(err) => {
                tracing::error!(error = %err, "upstream error");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream service error".to_string(),
                )
            }
            SmartFridgeError::Storage(err) | SmartFridgeError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use lightapi_domain::error::LightApiError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`LightApiError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(LightApiError);

impl From<LightApiError> for ApiError {
    fn from(err: LightApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LightApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LightApiError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            LightApiError::Backend(err) => {
                tracing::error!(error = %err, "backend error");
                (StatusCode::BAD_GATEWAY, "backend unavailable".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

//! HTTP error response mapping for JSON endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hobbyhub_domain::error::HobbyHubError;

/// JSON error body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HobbyHubError`] to a JSON HTTP response.
///
/// User deletion is the only route that answers with this payload; every
/// other route renders HTML on failure.
pub struct JsonError(HobbyHubError);

impl From<HobbyHubError> for JsonError {
    fn from(err: HobbyHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HobbyHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HobbyHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HobbyHubError::Auth(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HobbyHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

use axum::{http::StatusCode, response::Response};

use crate::api_response::error_response;

/// The response for API routes that do not exist.
pub async fn get_api_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

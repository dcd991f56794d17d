//! The JSON envelope every API response is wrapped in.
//!
//! Successful responses look like `{"success": true, "count": 2, "data": [...]}`,
//! where `count` is only present for lists. Failures look like
//! `{"success": false, "message": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A successful API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a single value.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Wrap a list of values and include the number of items.
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: &'a str,
}

/// Build a failed API response with `status` and a human readable `message`.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            success: false,
            message,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::api_response::ApiResponse;

    #[test]
    fn single_value_has_no_count() {
        let value = serde_json::to_value(ApiResponse::new("foo")).unwrap();

        assert_eq!(value, json!({"success": true, "data": "foo"}));
    }

    #[test]
    fn list_includes_count() {
        let value = serde_json::to_value(ApiResponse::list(vec![1, 2, 3])).unwrap();

        assert_eq!(value, json!({"success": true, "count": 3, "data": [1, 2, 3]}));
    }

    #[test]
    fn empty_list_has_zero_count() {
        let value = serde_json::to_value(ApiResponse::list(Vec::<u8>::new())).unwrap();

        assert_eq!(value, json!({"success": true, "count": 0, "data": []}));
    }
}

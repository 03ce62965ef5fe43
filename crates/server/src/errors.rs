//! API error types mapped to HTTP status codes
//!
//! Every error body follows the search envelope convention:
//! `{"success": false, "message": ..., "results": [], "totalResults": 0}`.
//! Internal detail is logged server-side, never leaked to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type that implements `IntoResponse`
///
/// Each variant maps to an HTTP status code:
/// - `TooManyRequests` → 429
/// - `Internal` → 500
///
/// Query validation ("too short to search") is not an error; it is handled
/// by the search handler as a well-formed 200 response.
#[derive(Debug)]
pub enum ApiError {
    /// Rate limit exceeded (429).
    TooManyRequests,
    /// Unexpected server error, e.g. a repository failure (500).
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::TooManyRequests => (StatusCode::TOO_MANY_REQUESTS, "Too many requests"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };
        let body = axum::Json(json!({
            "success": false,
            "message": message,
            "results": [],
            "totalResults": 0,
        }));
        (status, body).into_response()
    }
}

impl From<folio_core::Error> for ApiError {
    fn from(_: folio_core::Error) -> Self {
        ApiError::Internal
    }
}

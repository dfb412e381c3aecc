use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Router fallback.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound)
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, ErrorCode::MethodNotAllowed)
}

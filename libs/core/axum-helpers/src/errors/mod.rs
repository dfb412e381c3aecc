pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1005,
///   "error": "BAD_REQUEST",
///   "message": "A new mission cannot already have an ID",
///   "details": { "entityName": "mission", "errorKey": "idexists" }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: i32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// A rejected request tied to one entity, reported with a machine
    /// readable `errorKey` such as `idexists`.
    #[error("Bad Request: {message}")]
    BadRequestAlert {
        entity_name: &'static str,
        error_key: &'static str,
        message: String,
    },

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    fn into_parts(self) -> (StatusCode, ErrorResponse) {
        match self {
            AppError::Database(e) => map_db_error(&e),
            AppError::JsonExtractorRejection(e) => map_json_rejection(&e),
            AppError::ValidationError(e) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), errors = ?e, "validation failed");
                let details = serde_json::to_value(&e).unwrap_or(Value::Null);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        ErrorCode::ValidationError,
                        ErrorCode::ValidationError.default_message(),
                    )
                    .with_details(details),
                )
            }
            AppError::InvalidPath(msg) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), "invalid path: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::InvalidId, msg),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::BadRequest, msg),
                )
            }
            AppError::BadRequestAlert {
                entity_name,
                error_key,
                message,
            } => {
                tracing::info!(entity_name, error_key, "bad request: {}", message);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::BadRequest, message).with_details(json!({
                        "entityName": entity_name,
                        "errorKey": error_key,
                    })),
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(ErrorCode::NotFound, msg),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = ErrorCode::InternalError.code(), "internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::InternalError,
                        ErrorCode::InternalError.default_message(),
                    ),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("service unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(ErrorCode::ServiceUnavailable, msg),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        (status, Json(body)).into_response()
    }
}

/// Storage failures never leak driver messages to clients.
fn map_db_error(error: &DbErr) -> (StatusCode, ErrorResponse) {
    match error {
        DbErr::RecordNotFound(what) => {
            tracing::info!(error_code = ErrorCode::NotFound.code(), "record not found: {}", what);
            (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::NotFound, ErrorCode::NotFound.default_message()),
            )
        }
        DbErr::ConnectionAcquire(e) => {
            tracing::warn!(error_code = ErrorCode::DatabaseUnavailable.code(), "connection acquire failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(
                    ErrorCode::DatabaseUnavailable,
                    ErrorCode::DatabaseUnavailable.default_message(),
                ),
            )
        }
        other => {
            tracing::error!(error_code = ErrorCode::DatabaseError.code(), "database error: {:?}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    ErrorCode::DatabaseError,
                    ErrorCode::DatabaseError.default_message(),
                ),
            )
        }
    }
}

/// Malformed bodies and unknown enum values are plain 400s.
fn map_json_rejection(rejection: &JsonRejection) -> (StatusCode, ErrorResponse) {
    tracing::info!(error_code = ErrorCode::InvalidJson.code(), "json rejected: {}", rejection.body_text());
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(ErrorCode::InvalidJson, rejection.body_text()),
        ),
        JsonRejection::MissingJsonContentType(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorResponse::new(
                ErrorCode::UnsupportedMediaType,
                ErrorCode::UnsupportedMediaType.default_message(),
            ),
        ),
        other => (
            other.status(),
            ErrorResponse::new(ErrorCode::BadRequest, other.body_text()),
        ),
    }
}

/// Builds an error response with the code's default message.
pub fn error_response(status: StatusCode, error_code: ErrorCode) -> Response {
    (
        status,
        Json(ErrorResponse::new(error_code, error_code.default_message())),
    )
        .into_response()
}

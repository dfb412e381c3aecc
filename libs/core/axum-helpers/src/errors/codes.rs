//! Error code catalogue.
//!
//! Every error body carries both the string form (`"NOT_FOUND"`) and the
//! numeric form (`1004`) of one of these codes.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
//! assert_eq!(ErrorCode::ValidationError.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    ValidationError,
    InvalidId,
    InvalidJson,
    NotFound,
    BadRequest,
    UnsupportedMediaType,
    MethodNotAllowed,

    // Server errors (1100s)
    InternalError,
    ServiceUnavailable,

    // Storage errors (2000s)
    DatabaseError,
    DatabaseUnavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::BadRequest => 1005,
            Self::UnsupportedMediaType => 1006,
            Self::MethodNotAllowed => 1007,
            Self::InternalError => 1100,
            Self::ServiceUnavailable => 1101,
            Self::DatabaseError => 2001,
            Self::DatabaseUnavailable => 2002,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid identifier",
            Self::InvalidJson => "Malformed JSON request body",
            Self::NotFound => "The requested resource was not found",
            Self::BadRequest => "Bad request",
            Self::UnsupportedMediaType => "Expected request with `Content-Type: application/json`",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseError => "A database error occurred",
            Self::DatabaseUnavailable => "The database is temporarily unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

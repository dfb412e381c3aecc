//! Reusable OpenAPI error responses.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "error": "DATABASE_ERROR",
        "message": "A database error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - a required field is missing or empty",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "name": [{
                "code": "required",
                "message": null,
                "params": {}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - identifier rule violated",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "BAD_REQUEST",
        "message": "A new mission cannot already have an ID",
        "details": { "entityName": "mission", "errorKey": "idexists" }
    })
)]
pub struct BadRequestAlertResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - identifier is not a number",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_ID",
        "message": "Invalid identifier: abc"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Mission 42 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "code": 1101,
        "error": "SERVICE_UNAVAILABLE",
        "message": "database: connection refused"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);

//! # Axum Helpers
//!
//! Web-layer building blocks shared by the resource crates.
//!
//! - **[`server`]**: router assembly with OpenAPI UIs, health probes, graceful shutdown
//! - **[`http`]**: security headers, pagination `Link` headers, entity alert headers
//! - **[`errors`]**: [`AppError`] and the JSON error body
//! - **[`extractors`]**: validated JSON, numeric id path, pageable query
//! - **[`audit`]**: audit trail of data changes

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_postgres,
    create_production_app, create_router, health_router, run_health_checks,
};

pub use http::{API_PREFIX, EntityAlerts, pagination_headers, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, PageParams, Pageable, ValidatedJson};

pub use audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};

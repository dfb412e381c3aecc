//! Response-side HTTP helpers.

pub mod alerts;
pub mod pagination;
pub mod security;

pub use alerts::EntityAlerts;
pub use pagination::pagination_headers;
pub use security::security_headers;

/// Prefix every resource router is nested under.
pub const API_PREFIX: &str = "/api";

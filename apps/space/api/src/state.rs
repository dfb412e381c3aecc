//! Shared state handed to the routers at startup.

/// Cloned per router; the connection is a pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}

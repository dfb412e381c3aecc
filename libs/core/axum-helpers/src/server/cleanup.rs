use tracing::{error, info};

/// Closes the SeaORM pool, logging the outcome.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(()) => info!(pool = name, "PostgreSQL pool closed"),
        Err(e) => error!(pool = name, error = %e, "failed to close PostgreSQL pool"),
    }
}

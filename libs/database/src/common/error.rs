#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// A sort property that does not name a column of the entity.
    #[error("Unknown sort property: {0}")]
    InvalidSortProperty(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

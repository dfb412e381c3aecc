//! PostgreSQL connections, migrations and health checks over SeaORM.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{connect_from_config_with_retry, run_migrations};
pub use health::{HealthStatus, check_health, check_health_detailed};

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;

//! Persistence plumbing for the space services.
//!
//! - [`pagination`]: page requests, sort orders and result pages, shared by
//!   the SQL and in-memory repositories.
//! - [`repository`]: a generic SeaORM repository every entity adapter wraps.
//! - [`postgres`]: connection pool setup, migrations and health checks.
//!
//! # Features
//!
//! - `postgres` (default): SeaORM-backed modules
//! - `config`: `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::new(url), None).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "space_api").await?;
//! ```

pub mod common;
pub mod pagination;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
pub mod repository;

pub use common::{DatabaseError, DatabaseResult};
pub use pagination::{Direction, Page, PageRequest, SortOrder};

#[cfg(feature = "postgres")]
pub use repository::{BaseRepository, SortableEntity};

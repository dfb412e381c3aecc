//! HTTP server assembly: documentation routes, middleware stack, health
//! probes and graceful shutdown.
//!
//! ```ignore
//! let router = create_router::<ApiDoc>(api_routes).await?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use cleanup::close_postgres;
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;

use axum_helpers::server::{close_postgres, create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before anything fallible
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
            .await
            .map_err(|e| eyre::eyre!("Database migration failed: {}", e))?;
    }

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // /health is liveness only, /ready pings the database
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        app = state.config.app.name,
        version = state.config.app.version,
        "starting space API"
    );

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("shutting down: closing database connections");
            close_postgres(state.db, "space").await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("space API shutdown complete");
    Ok(())
}

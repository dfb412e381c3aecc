use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Installs color-eyre report hooks. Call first thing in `main`.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initializes the global subscriber.
///
/// Production (`APP_ENV=production`) logs flattened JSON lines; development logs
/// pretty, multi-line events. Both capture span traces through `ErrorLayer`.
/// `RUST_LOG` overrides the default filter.
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info,sea_orm=warn,sqlx=warn")
        } else {
            EnvFilter::new("debug,sqlx=info,tower_http=debug")
        }
    });

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => info!(?environment, "tracing initialized"),
        Err(_) => debug!("tracing already initialized"),
    }
}

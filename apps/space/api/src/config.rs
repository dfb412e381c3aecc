use core_config::{AppInfo, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Space API configuration, composed from the shared config components.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Prefix of the `X-{app}-alert` headers read by the web client.
    pub client_app_name: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            client_app_name: env_or_default("CLIENT_APP_NAME", "spaceApp"),
            run_migrations: env_parse("RUN_MIGRATIONS", true)?,
        })
    }
}

use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse, env_required};

/// Connection pool settings.
///
/// With the `config` feature this loads from the environment:
///
/// | variable | default |
/// |---|---|
/// | `DATABASE_URL` | required |
/// | `DB_MAX_CONNECTIONS` | 20 |
/// | `DB_MIN_CONNECTIONS` | 2 |
/// | `DB_CONNECT_TIMEOUT_SECS` | 8 |
/// | `DB_ACQUIRE_TIMEOUT_SECS` | 8 |
/// | `DB_IDLE_TIMEOUT_SECS` | 300 |
/// | `DB_MAX_LIFETIME_SECS` | 1800 |
/// | `DB_SQLX_LOGGING` | false |
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_pool_size(mut self, max_connections: u32, min_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = min_connections;
        self
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Debug);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 300,
            max_lifetime_secs: 1800,
            sqlx_logging: false,
        }
    }
}

#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_parse("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: env_parse("DB_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout_secs: env_parse(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            acquire_timeout_secs: env_parse(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
            idle_timeout_secs: env_parse("DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout_secs)?,
            max_lifetime_secs: env_parse("DB_MAX_LIFETIME_SECS", defaults.max_lifetime_secs)?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", defaults.sqlx_logging)?,
        })
    }
}

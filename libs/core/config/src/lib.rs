//! Environment-driven configuration shared by the space services.
//!
//! Every config struct implements [`FromEnv`] and is composed by the binary
//! into its own top-level `Config`.

pub mod server;
pub mod tracing;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Deployment environment, selected by `APP_ENV`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Name and version of the running binary, reported by the health endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Builds an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Reads `key` and parses it, falling back to `default` when unset.
pub fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn environment_production_is_case_insensitive() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn unknown_environment_falls_back_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn app_info_reads_cargo_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }

    #[test]
    fn env_or_default_prefers_the_variable() {
        temp_env::with_var("SPACE_TEST_VAR", Some("set"), || {
            assert_eq!(env_or_default("SPACE_TEST_VAR", "fallback"), "set");
        });
        temp_env::with_var_unset("SPACE_TEST_VAR", || {
            assert_eq!(env_or_default("SPACE_TEST_VAR", "fallback"), "fallback");
        });
    }

    #[test]
    fn env_required_reports_the_missing_key() {
        temp_env::with_var_unset("SPACE_REQUIRED", || {
            let err = env_required("SPACE_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("SPACE_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
        temp_env::with_var("SPACE_REQUIRED", Some("value"), || {
            assert_eq!(env_required("SPACE_REQUIRED").unwrap(), "value");
        });
    }

    #[test]
    fn env_parse_uses_default_when_unset() {
        temp_env::with_var_unset("SPACE_PARSE", || {
            assert_eq!(env_parse("SPACE_PARSE", 42u32).unwrap(), 42);
        });
    }

    #[test]
    fn env_parse_parses_and_trims() {
        temp_env::with_var("SPACE_PARSE", Some(" 7 "), || {
            assert_eq!(env_parse("SPACE_PARSE", 0u32).unwrap(), 7);
        });
        temp_env::with_var("SPACE_PARSE", Some("false"), || {
            assert!(!env_parse("SPACE_PARSE", true).unwrap());
        });
    }

    #[test]
    fn env_parse_rejects_garbage() {
        temp_env::with_var("SPACE_PARSE", Some("seven"), || {
            let err = env_parse("SPACE_PARSE", 0u32).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "SPACE_PARSE"));
        });
    }
}

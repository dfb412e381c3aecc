use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Bind address of the HTTP listener.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` defaults to all interfaces, `PORT` to 8080.
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse("PORT", 8080u16)?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8080)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", None::<&str>)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn host_and_port_are_overridable() {
        temp_env::with_vars(
            [("HOST", Some("127.0.0.1")), ("PORT", Some("3000"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.host, "127.0.0.1");
                assert_eq!(config.port, 3000);
            },
        );
    }

    #[test]
    fn invalid_port_is_a_parse_error() {
        for port in ["not_a_number", "99999"] {
            temp_env::with_var("PORT", Some(port), || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("PORT"));
            });
        }
    }

    #[test]
    fn default_matches_env_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }
}

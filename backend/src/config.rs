use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "SIAP_LAPOR";

/// Runtime settings of the embedded web server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the portal in the default browser once the server is up.
    pub open_browser: bool,
    /// Default `env_logger` filter. `RUST_LOG` still wins.
    pub log_level: String,
}

impl ServerConfig {
    /// Defaults overridden by `SIAP_LAPOR_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("open_browser", true)?
            .set_default("log_level", "info")?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn defaults_without_overrides() {
        let config = ServerConfig::from_env(env(&[])).unwrap();
        assert_eq!(
            config,
            ServerConfig {
                host: "127.0.0.1".into(),
                port: 8080,
                open_browser: true,
                log_level: "info".into(),
            }
        );
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn prefixed_variables_override_defaults() {
        let config = ServerConfig::from_env(env(&[
            ("SIAP_LAPOR_PORT", "9000"),
            ("SIAP_LAPOR_OPEN_BROWSER", "false"),
            ("SIAP_LAPOR_LOG_LEVEL", "debug"),
            ("OTHER_PORT", "1"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(ServerConfig::from_env(env(&[("SIAP_LAPOR_PORT", "not-a-port")])).is_err());
    }
}

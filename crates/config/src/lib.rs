//! Sift Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! Configuration is loaded and validated once at startup; the validated
//! snapshot (and the [`Policy`](sift_validate::Policy) built from it) is
//! immutable for the lifetime of the process.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use sift_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[auth]\napi_keys = [\"supersecretkey\"]").unwrap();
//! ```
//!
//! # Example Config
//!
//! ```toml
//! [server]
//! port = 8080
//!
//! [log]
//! level = "info"
//!
//! [validation]
//! prometheus_whitelist = ["esp32_temperature_celsius"]
//! max_otel_batch_bytes = 1048576
//! max_events_count = 100
//!
//! [auth]
//! api_keys = ["supersecretkey"]
//! ```

mod auth;
mod error;
mod logging;
mod server;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use auth::AuthConfig;
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogLevel};
pub use server::ServerConfig;
pub use validation::ValidationConfig;

use serde::Deserialize;

/// Minimum accepted API key length
const MIN_API_KEY_LENGTH: usize = 10;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listen address
    pub server: ServerConfig,

    /// Logging configuration
    pub log: LogConfig,

    /// Batch sanitization limits
    pub validation: ValidationConfig,

    /// API key configuration
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, contains invalid TOML, or
    /// fails startup validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// This is the loud-failure point for misconfiguration: the engine
    /// itself never re-checks the policy, so everything it assumes is
    /// enforced here, before the server starts accepting batches.
    fn validate(&self) -> Result<()> {
        if self.validation.prometheus_whitelist.is_empty() {
            return Err(ConfigError::EmptyWhitelist);
        }
        if self.validation.max_otel_batch_bytes == 0 {
            return Err(ConfigError::invalid_value(
                "validation",
                "max_otel_batch_bytes",
                "must be positive",
            ));
        }
        if self.validation.max_events_count == 0 {
            return Err(ConfigError::invalid_value(
                "validation",
                "max_events_count",
                "must be positive",
            ));
        }
        if self.server.port < 1024 {
            return Err(ConfigError::invalid_value(
                "server",
                "port",
                format!("must be at least 1024, got {}", self.server.port),
            ));
        }
        if !self.auth.has_key_source() {
            return Err(ConfigError::NoApiKeys);
        }
        for (index, key) in self.auth.api_keys.iter().enumerate() {
            if key.len() < MIN_API_KEY_LENGTH {
                return Err(ConfigError::WeakApiKey {
                    index,
                    length: key.len(),
                    minimum: MIN_API_KEY_LENGTH,
                });
            }
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_str("[auth]\napi_keys = [\"supersecretkey\"]").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.validation.max_events_count, 100);
        assert_eq!(config.validation.prometheus_whitelist.len(), 3);
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9090

[log]
level = "debug"

[validation]
prometheus_whitelist = ["cpu_usage", "memory_usage"]
max_otel_batch_bytes = 4096
max_events_count = 5

[auth]
api_keys = ["0123456789abcdef"]
api_keys_file = "configs/apikeys.conf"
"#;
        let config = Config::from_str(toml).unwrap();

        assert_eq!(config.server.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.validation.max_otel_batch_bytes, 4096);
        assert_eq!(config.validation.max_events_count, 5);
        assert_eq!(
            config.auth.api_keys_file.as_deref(),
            Some("configs/apikeys.conf")
        );

        let policy = config.validation.to_policy();
        assert!(policy.is_whitelisted("cpu_usage"));
        assert!(!policy.is_whitelisted("esp32_temperature_celsius"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_str("invalid { toml").is_err());
    }

    #[test]
    fn test_empty_whitelist_rejected() {
        let toml = r#"
[validation]
prometheus_whitelist = []

[auth]
api_keys = ["supersecretkey"]
"#;
        assert!(matches!(
            Config::from_str(toml),
            Err(ConfigError::EmptyWhitelist)
        ));
    }

    #[test]
    fn test_zero_otel_budget_rejected() {
        let toml = r#"
[validation]
max_otel_batch_bytes = 0

[auth]
api_keys = ["supersecretkey"]
"#;
        assert!(matches!(
            Config::from_str(toml),
            Err(ConfigError::InvalidValue { field, .. }) if field == "max_otel_batch_bytes"
        ));
    }

    #[test]
    fn test_zero_events_cap_rejected() {
        let toml = r#"
[validation]
max_events_count = 0

[auth]
api_keys = ["supersecretkey"]
"#;
        assert!(Config::from_str(toml).is_err());
    }

    #[test]
    fn test_privileged_port_rejected() {
        let toml = r#"
[server]
port = 80

[auth]
api_keys = ["supersecretkey"]
"#;
        assert!(matches!(
            Config::from_str(toml),
            Err(ConfigError::InvalidValue { field, .. }) if field == "port"
        ));
    }

    #[test]
    fn test_missing_api_keys_rejected() {
        assert!(matches!(
            Config::from_str(""),
            Err(ConfigError::NoApiKeys)
        ));
    }

    #[test]
    fn test_short_api_key_rejected() {
        let toml = "[auth]\napi_keys = [\"short\"]";
        assert!(matches!(
            Config::from_str(toml),
            Err(ConfigError::WeakApiKey { length: 5, .. })
        ));
    }
}

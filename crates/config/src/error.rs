//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file '{path}': {source}")]
    IoError {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error - invalid value for a field
    #[error("invalid {section}.{field}: {message}")]
    InvalidValue {
        /// Config section (e.g. "validation")
        section: &'static str,
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },

    /// The Prometheus whitelist is empty
    #[error("validation.prometheus_whitelist cannot be empty")]
    EmptyWhitelist,

    /// No API keys configured
    #[error("no API keys configured - set auth.api_keys or auth.api_keys_file")]
    NoApiKeys,

    /// An API key is too short to be safe
    #[error("API key at index {index} is too short ({length} chars, minimum {minimum})")]
    WeakApiKey {
        /// Position in auth.api_keys
        index: usize,
        /// Actual key length
        length: usize,
        /// Required minimum length
        minimum: usize,
    },
}

impl ConfigError {
    /// Create an InvalidValue error
    pub fn invalid_value(
        section: &'static str,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            section,
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::invalid_value("server", "port", "must be at least 1024");
        assert!(err.to_string().contains("server.port"));
        assert!(err.to_string().contains("at least 1024"));
    }

    #[test]
    fn test_weak_api_key_error() {
        let err = ConfigError::WeakApiKey {
            index: 2,
            length: 4,
            minimum: 10,
        };
        assert!(err.to_string().contains("index 2"));
        assert!(err.to_string().contains("4 chars"));
    }
}

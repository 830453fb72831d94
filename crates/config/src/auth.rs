//! Authentication configuration

use serde::Deserialize;

/// API key configuration.
///
/// Keys can be listed inline, loaded from a file, or both. The file format
/// is one key per line with `#` comments (see `sift-auth`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Inline API keys
    pub api_keys: Vec<String>,

    /// Path to an API keys file, merged with the inline list
    pub api_keys_file: Option<String>,
}

impl AuthConfig {
    /// Whether any key source is configured
    pub fn has_key_source(&self) -> bool {
        !self.api_keys.is_empty() || self.api_keys_file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_key_source() {
        assert!(!AuthConfig::default().has_key_source());
    }

    #[test]
    fn test_file_counts_as_key_source() {
        let config = AuthConfig {
            api_keys: vec![],
            api_keys_file: Some("keys.conf".into()),
        };
        assert!(config.has_key_source());
    }
}

//! HTTP server configuration

use serde::Deserialize;

/// Listen address for the ingestion API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host
    /// Default: "0.0.0.0"
    pub host: String,

    /// Bind port (must be >= 1024)
    /// Default: 8080
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Bind address in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

//! Sanitization policy configuration

use serde::Deserialize;
use sift_validate::Policy;

/// Limits applied to every telemetry batch.
///
/// The defaults mirror the fleet's initial deployment: the three esp32
/// metrics on the whitelist, a 1 MiB OTEL budget, and a 100-event cap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Prometheus metric names allowed through the filter
    pub prometheus_whitelist: Vec<String>,

    /// Byte budget for the estimated size of the OTEL stream
    /// Default: 1048576 (1 MiB)
    pub max_otel_batch_bytes: u64,

    /// Cap on the number of events per batch
    /// Default: 100
    pub max_events_count: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            prometheus_whitelist: vec![
                "esp32_temperature_celsius".into(),
                "esp32_memory_usage_bytes".into(),
                "esp32_wifi_signal_strength".into(),
            ],
            max_otel_batch_bytes: 1024 * 1024,
            max_events_count: 100,
        }
    }
}

impl ValidationConfig {
    /// Build the immutable engine policy from this section.
    ///
    /// Only call after [`Config::validate`](crate::Config) has passed - the
    /// engine assumes a non-empty whitelist and positive budgets.
    pub fn to_policy(&self) -> Policy {
        Policy::new(
            self.prometheus_whitelist.iter().cloned(),
            self.max_otel_batch_bytes,
            self.max_events_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fleet_whitelist() {
        let config = ValidationConfig::default();
        assert_eq!(config.prometheus_whitelist.len(), 3);
        assert_eq!(config.max_otel_batch_bytes, 1_048_576);
        assert_eq!(config.max_events_count, 100);
    }

    #[test]
    fn test_to_policy() {
        let policy = ValidationConfig::default().to_policy();
        assert!(policy.is_whitelisted("esp32_temperature_celsius"));
        assert!(!policy.is_whitelisted("custom_metric"));
        assert_eq!(policy.max_events_count, 100);
    }
}

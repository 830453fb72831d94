//! Validation outcome counters

use serde::Serialize;
use tracing::debug;

use sift_validate::{OutcomeRecorder, Violation};

use crate::Counter;

/// Process-lifetime counters for validation outcomes.
///
/// One instance lives in the server state; the telemetry handler hands it
/// to the engine as the outcome recorder and bumps the batch-level counters
/// itself.
#[derive(Debug, Default)]
pub struct ValidationMetrics {
    /// Batches received on the ingest endpoint
    pub batches_received: Counter,
    /// Batches that produced at least one warning
    pub batches_with_warnings: Counter,
    /// Prometheus metrics dropped by the whitelist filter
    pub whitelist_drops: Counter,
    /// OTEL streams truncated to fit the byte budget
    pub otel_truncations: Counter,
    /// Event streams truncated to the count cap
    pub events_truncations: Counter,
}

/// Point-in-time view of [`ValidationMetrics`], serialized on `/metrics`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValidationSnapshot {
    /// Batches received on the ingest endpoint
    pub batches_received: u64,
    /// Batches that produced at least one warning
    pub batches_with_warnings: u64,
    /// Prometheus metrics dropped by the whitelist filter
    pub whitelist_drops: u64,
    /// OTEL streams truncated to fit the byte budget
    pub otel_truncations: u64,
    /// Event streams truncated to the count cap
    pub events_truncations: u64,
}

impl ValidationMetrics {
    /// Create counters initialized to 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a consistent-enough snapshot for reporting
    ///
    /// Individual loads are relaxed; exact cross-counter consistency is not
    /// needed for monitoring.
    pub fn snapshot(&self) -> ValidationSnapshot {
        ValidationSnapshot {
            batches_received: self.batches_received.get(),
            batches_with_warnings: self.batches_with_warnings.get(),
            whitelist_drops: self.whitelist_drops.get(),
            otel_truncations: self.otel_truncations.get(),
            events_truncations: self.events_truncations.get(),
        }
    }
}

impl OutcomeRecorder for ValidationMetrics {
    fn record(&self, device_id: &str, violation: &Violation<'_>) {
        match violation {
            Violation::MetricNotWhitelisted { name } => {
                self.whitelist_drops.inc();
                debug!(device_id = %device_id, metric = %name, "recorded whitelist drop");
            }
            Violation::OtelBatchTruncated {
                estimated_bytes,
                original,
                kept,
            } => {
                self.otel_truncations.inc();
                debug!(
                    device_id = %device_id,
                    estimated_bytes,
                    original,
                    kept,
                    "recorded OTEL truncation"
                );
            }
            Violation::EventsTruncated { original, kept } => {
                self.events_truncations.inc();
                debug!(device_id = %device_id, original, kept, "recorded events truncation");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_matching_counter() {
        let metrics = ValidationMetrics::new();

        metrics.record("d1", &Violation::MetricNotWhitelisted { name: "rogue" });
        metrics.record("d1", &Violation::MetricNotWhitelisted { name: "rogue2" });
        metrics.record(
            "d1",
            &Violation::OtelBatchTruncated {
                estimated_bytes: 500,
                original: 10,
                kept: 2,
            },
        );
        metrics.record(
            "d1",
            &Violation::EventsTruncated {
                original: 10,
                kept: 5,
            },
        );

        let snap = metrics.snapshot();
        assert_eq!(snap.whitelist_drops, 2);
        assert_eq!(snap.otel_truncations, 1);
        assert_eq!(snap.events_truncations, 1);
        assert_eq!(snap.batches_received, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = ValidationMetrics::new();
        metrics.batches_received.inc();

        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["batches_received"], 1);
        assert_eq!(json["whitelist_drops"], 0);
    }
}

//! Validation outcome types
//!
//! Everything the engine reports back to the caller: the sanitized batch,
//! per-stream statistics, and structured warnings. None of these are
//! errors - a batch is never rejected for content reasons.

use serde::Serialize;
use serde_json::Value;

use sift_protocol::TelemetryBatch;

/// Kind of violation observed while sanitizing a batch.
///
/// Closed set so that consumers branching on the kind get exhaustive-match
/// safety. Serialized in SCREAMING_SNAKE_CASE to match the wire vocabulary
/// devices and dashboards already use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    /// A Prometheus metric's name is not in the whitelist
    MetricNotWhitelisted,
    /// Estimated OTEL stream size exceeded the byte budget
    OtelBatchSizeExceeded,
    /// Event count exceeded the configured cap
    EventsArraySizeExceeded,
}

impl WarningKind {
    /// Stable string form, used for counter labels and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MetricNotWhitelisted => "METRIC_NOT_WHITELISTED",
            Self::OtelBatchSizeExceeded => "OTEL_BATCH_SIZE_EXCEEDED",
            Self::EventsArraySizeExceeded => "EVENTS_ARRAY_SIZE_EXCEEDED",
        }
    }
}

/// One structured warning entry.
///
/// A single batch can carry many of these: one per dropped Prometheus
/// metric, plus at most one per truncated stream.
#[derive(Debug, Clone, Serialize)]
pub struct Warning {
    /// What went wrong
    pub kind: WarningKind,
    /// Human-readable description
    pub message: String,
    /// Which request field the warning refers to
    pub field: &'static str,
    /// Offending value (metric name, byte size, or event count)
    pub value: Value,
}

/// Per-stream counts and truncation flags for one validated batch.
///
/// An absent stream counts as length 0 both before and after.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Statistics {
    /// OTEL metrics submitted
    pub original_otel: usize,
    /// Events submitted
    pub original_events: usize,
    /// Prometheus metrics submitted
    pub original_prometheus: usize,
    /// OTEL metrics retained
    pub validated_otel: usize,
    /// Events retained
    pub validated_events: usize,
    /// Prometheus metrics retained
    pub validated_prometheus: usize,
    /// Prometheus metrics dropped by the whitelist filter
    pub dropped_prometheus: usize,
    /// Whether the OTEL stream was truncated to fit the byte budget
    pub truncated_otel: bool,
    /// Whether the events stream was truncated to the count cap
    pub truncated_events: bool,
}

impl Statistics {
    /// Total retained items across all three streams.
    ///
    /// This is the "validated metrics" figure the transport layer reports
    /// back to the device.
    pub fn validated_total(&self) -> usize {
        self.validated_otel + self.validated_events + self.validated_prometheus
    }
}

/// Result of validating one batch.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// The input batch with each stream replaced by its sanitized version
    /// (absent streams stay absent)
    pub sanitized: TelemetryBatch,
    /// Per-stream counts and truncation flags
    pub statistics: Statistics,
    /// Ordered list of violations observed, possibly empty
    pub warnings: Vec<Warning>,
}

impl ValidationOutcome {
    /// Whether any violation was observed
    #[inline]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

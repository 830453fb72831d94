//! Sift - Protocol
//!
//! Wire data model for device telemetry batches.
//!
//! Edge devices submit a single JSON document per request containing up to
//! three independent streams: OTEL-style metrics, free-form events, and
//! Prometheus-style metrics. Field names on the wire are camelCase
//! (`deviceId`, `otel`, `events`, `metrics`); an absent stream is valid and
//! distinct from an empty one.
//!
//! These types are plain data - all sanitization policy lives in
//! `sift-validate`.

mod batch;
mod event;
mod metric;


pub use batch::TelemetryBatch;
pub use event::{Event, Severity};
pub use metric::{OtelMetric, PrometheusMetric, PrometheusType};

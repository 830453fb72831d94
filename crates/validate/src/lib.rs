//! Sift - Validation Engine
//!
//! Batch validation and truncation for device telemetry.
//!
//! # Overview
//!
//! Edge devices are resource-constrained and occasionally misbehave: they
//! submit metrics outside the allowed set, oversized OTEL batches, or too
//! many events at once. Rather than rejecting those batches, the engine
//! sanitizes them against a static [`Policy`] and reports what it did:
//!
//! - **Prometheus whitelist filter** - drops metrics whose name is not in
//!   the configured whitelist, one warning per dropped metric.
//! - **OTEL size-budget truncator** - estimates the serialized size of the
//!   OTEL stream and drops the oldest entries until the estimate fits.
//! - **Events count-cap truncator** - drops the oldest events beyond the
//!   configured cap.
//!
//! A batch is never rejected for content reasons; the only consumer-visible
//! downgrade is "accepted" becoming "accepted with warnings".
//!
//! # Design
//!
//! [`validate`] is a pure, synchronous function: same batch and policy in,
//! same outcome out, no shared state, no I/O. Per-outcome counters are the
//! caller's concern, wired in through the optional [`OutcomeRecorder`]
//! collaborator of [`validate_with_recorder`] - recorder failures cannot
//! affect the returned outcome because the trait is infallible by
//! construction. This keeps the decision logic fully unit-testable without
//! any metrics plumbing.
//!
//! # Example
//!
//! ```
//! use sift_validate::{validate, Policy};
//! use sift_protocol::TelemetryBatch;
//!
//! let policy = Policy::new(["cpu_usage"], 1_048_576, 100);
//! let json = r#"{"deviceId": "d1", "timestamp": "2025-06-01T12:00:00Z"}"#;
//! let batch: TelemetryBatch = serde_json::from_str(json).unwrap();
//!
//! let outcome = validate(batch, &policy);
//! assert!(outcome.warnings.is_empty());
//! ```

mod engine;
mod outcome;
mod policy;
mod recorder;


pub use engine::{estimate_otel_size, validate, validate_with_recorder};
pub use outcome::{Statistics, ValidationOutcome, Warning, WarningKind};
pub use policy::Policy;
pub use recorder::{NoopRecorder, OutcomeRecorder, Violation};

//! Sift - Metrics
//!
//! Counters for validation outcomes, exposed on the `/metrics` endpoint.
//!
//! # Design Principles
//!
//! - **Lock-free**: all metrics use atomic operations
//! - **Low overhead**: no allocations during metric updates
//! - **Fire-and-forget**: [`ValidationMetrics`] implements the engine's
//!   [`OutcomeRecorder`] trait; nothing it does can affect a validation
//!   outcome, and it is safe for concurrent, independent invocation
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sift_metrics::ValidationMetrics;
//! use sift_validate::{validate_with_recorder, Policy};
//! use sift_protocol::TelemetryBatch;
//!
//! let metrics = Arc::new(ValidationMetrics::new());
//! let policy = Policy::new(["cpu_usage"], 1_048_576, 100);
//!
//! let json = r#"{"deviceId": "d1", "timestamp": "2025-06-01T12:00:00Z"}"#;
//! let batch: TelemetryBatch = serde_json::from_str(json).unwrap();
//! validate_with_recorder(batch, &policy, metrics.as_ref());
//!
//! assert_eq!(metrics.snapshot().whitelist_drops, 0);
//! ```

mod validation;

pub use validation::{ValidationMetrics, ValidationSnapshot};

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter wrapper for convenient metric operations
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    /// Create a new counter initialized to 0
    #[inline]
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Increment the counter by `val` (relaxed ordering for performance)
    #[inline]
    pub fn add(&self, val: u64) {
        self.0.fetch_add(val, Ordering::Relaxed);
    }

    /// Increment the counter by 1
    #[inline]
    pub fn inc(&self) {
        self.add(1);
    }

    /// Get the current value (relaxed ordering)
    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        assert_eq!(Counter::new().get(), 0);
    }

    #[test]
    fn test_counter_inc_and_add() {
        let counter = Counter::new();
        counter.inc();
        counter.add(4);
        assert_eq!(counter.get(), 5);
    }
}

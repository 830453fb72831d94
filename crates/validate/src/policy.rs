//! Validation policy
//!
//! An immutable snapshot of the sanitization limits, built once from
//! validated configuration at startup and shared read-only across
//! concurrent validations.

use std::collections::HashSet;

/// Sanitization limits applied to every batch.
///
/// The config layer guarantees a non-empty whitelist and positive budgets
/// before a `Policy` is ever constructed; the engine does not re-validate
/// these but stays total if handed a degenerate policy (a zero byte budget
/// truncates the OTEL stream to empty rather than dividing by zero).
#[derive(Debug, Clone)]
pub struct Policy {
    /// Prometheus metric names allowed through the filter
    pub prometheus_whitelist: HashSet<String>,

    /// Byte budget for the estimated size of the OTEL stream
    pub max_otel_batch_bytes: u64,

    /// Cap on the number of events per batch
    pub max_events_count: usize,
}

impl Policy {
    /// Build a policy from a whitelist and limits
    pub fn new<I, S>(whitelist: I, max_otel_batch_bytes: u64, max_events_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prometheus_whitelist: whitelist.into_iter().map(Into::into).collect(),
            max_otel_batch_bytes,
            max_events_count,
        }
    }

    /// Check whether a Prometheus metric name is allowed
    #[inline]
    pub fn is_whitelisted(&self, name: &str) -> bool {
        self.prometheus_whitelist.contains(name)
    }
}

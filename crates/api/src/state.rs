//! Application state
//!
//! Shared state for API handlers: the immutable policy, the API key store,
//! and the outcome counters. Everything here is read-only or atomic, so
//! handlers on separate tasks never contend.

use std::sync::Arc;
use std::time::Instant;

use sift_auth::ApiKeyStore;
use sift_metrics::ValidationMetrics;
use sift_validate::Policy;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Sanitization limits, loaded once at startup
    pub policy: Arc<Policy>,
    /// Keys allowed to submit telemetry
    pub keys: Arc<ApiKeyStore>,
    /// Validation outcome counters
    pub metrics: Arc<ValidationMetrics>,
    /// Server start time, for uptime reporting
    pub start_time: Instant,
}

impl AppState {
    /// Create state from validated startup components
    pub fn new(policy: Arc<Policy>, keys: Arc<ApiKeyStore>, metrics: Arc<ValidationMetrics>) -> Self {
        Self {
            policy,
            keys,
            metrics,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

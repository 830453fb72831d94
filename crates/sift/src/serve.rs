//! Server wiring
//!
//! Builds the immutable startup state (policy, key store, counters) from
//! validated configuration and runs the Axum server until ctrl-c.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use sift_api::{build_router, AppState};
use sift_auth::ApiKeyStore;
use sift_config::Config;
use sift_metrics::ValidationMetrics;

/// Run the server with the given (already validated) configuration
pub async fn run(config: Config) -> Result<()> {
    let policy = Arc::new(config.validation.to_policy());

    let keys = ApiKeyStore::from_keys(config.auth.api_keys.iter().cloned());
    if let Some(path) = &config.auth.api_keys_file {
        keys.merge_file(path)
            .with_context(|| format!("loading API keys from '{path}'"))?;
    }
    let keys = Arc::new(keys);

    info!(
        whitelist = policy.prometheus_whitelist.len(),
        max_otel_batch_bytes = policy.max_otel_batch_bytes,
        max_events_count = policy.max_events_count,
        api_keys = keys.len(),
        "configuration loaded"
    );

    let metrics = Arc::new(ValidationMetrics::new());
    let state = AppState::new(policy, keys, metrics);
    let app = build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;
    info!(addr = %addr, "telemetry API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

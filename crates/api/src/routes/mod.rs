//! API routes

pub mod ops;
pub mod telemetry;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Operations routes (health, metrics - no auth)
        .merge(ops::routes())
        // Telemetry ingestion (API key required)
        .nest("/api/v1", telemetry::routes())
        .with_state(state)
}

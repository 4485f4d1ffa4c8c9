//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 if the dataset is loaded and non-empty.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match dataset_ok(&state) {
        true => StatusCode::OK,
        false => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dataset_ok = dataset_ok(&state);

    Json(HealthResponse {
        status: if dataset_ok { "healthy" } else { "unhealthy" }.to_string(),
        dataset: if dataset_ok { "ok" } else { "error" }.to_string(),
        rows: state.table.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The table is validated non-empty at load time, so this only fails if
/// something replaced the state with an empty table.
fn dataset_ok(state: &AppState) -> bool {
    !state.table.is_empty()
}

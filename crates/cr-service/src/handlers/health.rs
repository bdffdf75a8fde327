//! Health check handler.
//!
//! `/health` is a liveness probe: it checks no dependencies, so a failure
//! means the process itself is hung or dead.

use crate::models::HealthResponse;
use crate::routes::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// Handler for `GET /health`.
///
/// Always succeeds while the process is alive; reports seconds of uptime.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

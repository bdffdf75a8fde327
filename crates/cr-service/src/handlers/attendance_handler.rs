//! Attendance handlers.

use crate::errors::ApiError;
use crate::models::{AckResponse, AttendanceEvent, RecordAttendanceRequest};
use crate::routes::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::debug;

/// Handler for `POST /attendance`.
///
/// Records an attendance event. `stdId` is required; everything else is
/// optional and defaulted. The timestamp is server-assigned.
pub async fn record_attendance(
    State(state): State<Arc<AppState>>,
    body: axum::body::Bytes,
) -> Result<Json<AckResponse>, ApiError> {
    // Deserialize manually so a malformed body is a 400, not Axum's 422
    let request: RecordAttendanceRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(target: "cr.handlers.attendance", error = %e, "Invalid request body");
        ApiError::Validation("Invalid request body".to_string())
    })?;

    // Validation happens before the log is touched; a rejected request
    // never appends
    let new_event = request.validate()?;

    debug!(
        target: "cr.handlers.attendance",
        std_id = new_event.std_id,
        event = %new_event.event,
        "Attendance recorded"
    );

    state.attendance.record(new_event);

    Ok(Json(AckResponse { ok: true }))
}

/// Handler for `GET /attendance`.
///
/// Returns the most recent events (read window of 500), in insertion
/// order.
pub async fn list_attendance(State(state): State<Arc<AppState>>) -> Json<Vec<AttendanceEvent>> {
    Json(state.attendance.recent())
}

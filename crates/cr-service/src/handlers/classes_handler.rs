//! Class scheduling handlers.

use crate::errors::ApiError;
use crate::models::{ClassRecord, CreateClassRequest};
use crate::routes::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::{debug, info};

/// Handler for `GET /classes`.
///
/// Returns every scheduled class, ascending by `when`.
pub async fn list_classes(State(state): State<Arc<AppState>>) -> Json<Vec<ClassRecord>> {
    Json(state.schedule.list())
}

/// Handler for `POST /classes`.
///
/// Creates a class from `title`, `roomName`, `when` and optional
/// `createdBy`. Returns 400 when a required field is missing or empty;
/// a rejected request never consumes an id.
pub async fn create_class(
    State(state): State<Arc<AppState>>,
    body: axum::body::Bytes,
) -> Result<Json<ClassRecord>, ApiError> {
    // Deserialize manually so a malformed body is a 400, not Axum's 422
    let request: CreateClassRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(target: "cr.handlers.classes", error = %e, "Invalid request body");
        ApiError::Validation("Invalid request body".to_string())
    })?;

    // Validation happens before the store is touched, so the id counter
    // only moves on success
    let new_class = request.validate()?;
    let record = state.schedule.create(new_class);

    info!(
        target: "cr.handlers.classes",
        class_id = record.id,
        room = %record.room_name,
        "Class scheduled"
    );

    Ok(Json(record))
}

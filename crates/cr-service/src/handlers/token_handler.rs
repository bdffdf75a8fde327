//! Video access token handler.

use crate::errors::ApiError;
use crate::models::TokenResponse;
use crate::routes::AppState;
use crate::services::token_service;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Query parameters for `GET /token`. Both are optional; defaults and
/// length caps are applied by the token service.
#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub identity: Option<String>,
    pub room: Option<String>,
}

/// Handler for `GET /token?identity=&room=`.
///
/// Mints a room-scoped access token. Returns 500 when the signer is not
/// configured; never rejects caller input.
pub async fn issue_token(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<TokenResponse>, ApiError> {
    let response = token_service::mint(
        &state.config,
        query.identity.as_deref(),
        query.room.as_deref(),
    )?;

    debug!(
        target: "cr.handlers.token",
        identity = %response.identity,
        room = %response.room,
        "Access token minted"
    );

    Ok(Json(response))
}

//! HTTP routes for the classroom service.
//!
//! Defines the Axum router, the application state, and the cross-origin
//! policy.

use crate::config::Config;
use crate::handlers;
use crate::repositories::{AttendanceLog, ScheduleStore};
use axum::{
    http::{header, request::Parts, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Config,

    /// Class scheduling store.
    pub schedule: Arc<dyn ScheduleStore>,

    /// Attendance log.
    pub attendance: Arc<dyn AttendanceLog>,

    /// Process start time, for the uptime report.
    pub started_at: Instant,
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `GET /health` - Liveness probe
/// - `GET /token` - Mint a room-scoped video access token
/// - `GET /classes`, `POST /classes` - Class scheduling
/// - `GET /attendance`, `POST /attendance` - Attendance logging
/// - TraceLayer for request logging
/// - CorsLayer enforcing the origin allow-list
pub fn build_routes(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/token", get(handlers::issue_token))
        .route(
            "/classes",
            get(handlers::list_classes).post(handlers::create_class),
        )
        .route(
            "/attendance",
            get(handlers::list_attendance).post(handlers::record_attendance),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Cross-origin policy.
///
/// The allow-list is read once at router build. An empty list allows every
/// origin. A disallowed origin is not answered with an error; the response
/// simply carries no permissive CORS header, which is what makes the
/// browser block it. Requests without an Origin header are unaffected.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allowed: Vec<String> = allowed_origins.to_vec();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                allowed.is_empty()
                    || origin
                        .to_str()
                        .map(|o| allowed.iter().any(|a| a == o))
                        .unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

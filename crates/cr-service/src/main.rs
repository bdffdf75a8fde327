use cr_service::config::Config;
use cr_service::repositories::{InMemoryAttendanceLog, InMemoryScheduleStore};
use cr_service::routes::{self, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cr_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Classroom Controller");

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if config.signing.is_none() {
        // The service still boots; only /token will fail until the
        // signing variables are set
        tracing::warn!("Video signing credentials are not configured");
    }

    // Parse bind address before moving config
    let bind_address = config.bind_address.clone();

    // Create application state with in-memory stores
    let state = Arc::new(AppState {
        config,
        schedule: Arc::new(InMemoryScheduleStore::new()),
        attendance: Arc::new(InMemoryAttendanceLog::new()),
        started_at: Instant::now(),
    });

    // Build application routes
    let app = routes::build_routes(state);

    // Parse bind address
    let addr: SocketAddr = bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Classroom Controller listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, voice::VoiceController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes and layers configured
pub fn build_router(voice_controller: Arc<VoiceController>, max_upload_bytes: usize) -> Router {
    // Voice routes accept audio uploads, so they get a larger body limit
    let voice_routes = Router::new()
        .route("/api/voice/clone", post(VoiceController::clone_voice))
        .with_state(voice_controller)
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(voice_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    voice_controller: Arc<VoiceController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(voice_controller, config.max_upload_bytes());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}


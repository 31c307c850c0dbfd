use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET / - Service identification
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "app": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

// The provider key is checked at startup, so a running process is always configured.
pub async fn health_ready() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "provider": "configured"
        })),
    )
}

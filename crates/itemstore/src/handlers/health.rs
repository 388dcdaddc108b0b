//! Health check endpoint.

use axum::{response::IntoResponse, Json};

/// GET /health - Liveness probe.
///
/// Returns a fixed "ok" status without touching storage, so it stays cheap
/// enough for frequent polling.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

//! Service metadata endpoint.

use axum::{response::IntoResponse, Json};

/// GET / - Service metadata (name and docs link).
pub async fn service_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "itemstore",
        "docs": "/docs",
    }))
}

use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;

use crate::state::AppState;

/// Builds the `/health` route group: a single probe endpoint for uptime
/// checks and deployment monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Returns a simple success payload to indicate the API is running. Does
/// not touch the store.
async fn health_check() -> impl IntoResponse {
    Json(json!({ "message": "Health check passed" }))
}

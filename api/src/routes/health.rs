use axum::{Json, Router, response::IntoResponse, routing::get};
use util::state::AppState;

use crate::response::MessageResponse;

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint returning a basic success message, for
/// uptime checks, load balancers, or deployment health monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /api/health
///
/// ### Response
/// - `200 OK`: `{ "message": "Health check passed" }`
async fn health_check() -> impl IntoResponse {
    Json(MessageResponse::new("Health check passed"))
}

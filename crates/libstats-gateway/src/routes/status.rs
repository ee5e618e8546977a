//! Status endpoint.

use axum::{extract::State, routing::get, Json, Router};

use super::LIBRARY_STATS_PATH;
use crate::json::StatusResponse;
use crate::AppState;

/// Status routes.
pub fn routes() -> Router<AppState> {
    let path = format!("{LIBRARY_STATS_PATH}/status");
    Router::new()
        .route(&path, get(handle_status))
        .route(&format!("{path}/"), get(handle_status))
}

/// Report upstream availability and uptime.
async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let upstreams = state.stats.upstream_status().await;
    let uptime = state.started_at.elapsed().as_secs_f64();

    Json(StatusResponse::new(upstreams, uptime))
}

//! Library statistics HTTP/JSON gateway.
//!
//! Exposes book counts per language, readership estimates per country and an
//! upstream status report over a small REST API.

pub mod config;
pub mod error;
pub mod json;
pub mod routes;

pub use config::{Args, GatewayConfig};
pub use error::AppError;

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use libstats_core::LibraryStats;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Aggregation service.
    pub stats: Arc<LibraryStats>,
    /// When the gateway started, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Create new application state.
    pub fn new(stats: LibraryStats) -> Self {
        Self {
            stats: Arc::new(stats),
            started_at: Instant::now(),
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::index::routes())
        .merge(routes::bookcount::routes())
        .merge(routes::readership::routes())
        .merge(routes::status::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

//! Book count endpoint.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use libstats_core::LanguageStat;
use serde::Deserialize;
use tracing::debug;

use super::LIBRARY_STATS_PATH;
use crate::error::AppError;
use crate::AppState;

/// Book count routes.
pub fn routes() -> Router<AppState> {
    let path = format!("{LIBRARY_STATS_PATH}/bookcount");
    Router::new()
        .route(&path, get(handle_book_count))
        .route(&format!("{path}/"), get(handle_book_count))
}

/// Query parameters for book count.
#[derive(Debug, Deserialize)]
pub struct BookCountParams {
    /// Comma-separated two letter language codes.
    pub language: Option<String>,
}

/// Handle book count request.
async fn handle_book_count(
    State(state): State<AppState>,
    Query(params): Query<BookCountParams>,
) -> Result<Json<Vec<LanguageStat>>, AppError> {
    let query = params
        .language
        .filter(|language| !language.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest(
                "No language specified. Use ?language=<code>[,<code>...]".to_string(),
            )
        })?;

    debug!(language = %query, "book count request");
    let stats = state.stats.language_stats_for_query(&query).await?;
    Ok(Json(stats))
}

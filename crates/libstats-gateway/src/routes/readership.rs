//! Readership endpoint.
//!
//! The language code is the first path segment after the readership root;
//! anything after it is ignored, so `/readership/no/en` asks for `no`.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use libstats_core::ReadershipRecord;
use serde::Deserialize;
use tracing::debug;

use super::LIBRARY_STATS_PATH;
use crate::error::AppError;
use crate::AppState;

/// Readership routes.
pub fn routes() -> Router<AppState> {
    let path = format!("{LIBRARY_STATS_PATH}/readership");
    Router::new()
        .route(&path, get(handle_missing_code))
        .route(&format!("{path}/"), get(handle_missing_code))
        .route(&format!("{path}/:code"), get(handle_readership))
        .route(&format!("{path}/:code/"), get(handle_readership))
        .route(&format!("{path}/:code/*rest"), get(handle_readership_with_tail))
}

/// Query parameters for readership.
#[derive(Debug, Deserialize)]
pub struct ReadershipParams {
    /// Maximum number of countries to report. Must be a positive integer.
    pub limit: Option<String>,
}

/// Parse the `limit` parameter. Absent or empty means no limit.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => match raw.parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(Some(limit)),
            _ => Err(AppError::BadRequest(format!(
                "Invalid limit '{}'. Please specify a positive integer.",
                raw
            ))),
        },
    }
}

async fn handle_missing_code() -> Result<Json<Vec<ReadershipRecord>>, AppError> {
    Err(AppError::BadRequest(
        "No language code specified. Use /readership/<two_letter_language_code>".to_string(),
    ))
}

/// Handle readership request.
async fn handle_readership(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<ReadershipParams>,
) -> Result<Json<Vec<ReadershipRecord>>, AppError> {
    readership(&state, &code, params.limit.as_deref()).await
}

/// Handle readership request with extra path segments after the code.
async fn handle_readership_with_tail(
    State(state): State<AppState>,
    Path((code, _rest)): Path<(String, String)>,
    Query(params): Query<ReadershipParams>,
) -> Result<Json<Vec<ReadershipRecord>>, AppError> {
    readership(&state, &code, params.limit.as_deref()).await
}

async fn readership(
    state: &AppState,
    code: &str,
    limit: Option<&str>,
) -> Result<Json<Vec<ReadershipRecord>>, AppError> {
    let limit = parse_limit(limit)?;

    debug!(language = %code, ?limit, "readership request");
    let records = state.stats.readership(code, limit).await?;
    Ok(Json(records))
}

//! Root path.

use axum::{response::Html, routing::get, Router};

use super::{BOOK_COUNT_PATH, READERSHIP_PATH, STATUS_PATH};
use crate::AppState;

/// Index routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Point callers at the real endpoints.
async fn index() -> Html<String> {
    let links: String = [READERSHIP_PATH, BOOK_COUNT_PATH, STATUS_PATH]
        .iter()
        .map(|path| format!("<li><a href=\"{path}\">{path}</a></li>"))
        .collect();

    Html(format!(
        "This service does not provide any functionality on root path level. <br> \
         Please use paths: <ul>{links}</ul>"
    ))
}

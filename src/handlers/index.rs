//! Chat page handler
//!
//! Serves the single-page chat UI. The page is embedded in the binary at
//! compile time, so deployment is one executable plus a config file.

use axum::response::Html;

/// GET / handler
pub async fn handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

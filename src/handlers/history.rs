//! Transcript endpoint handler
//!
//! Handles GET /api/history: returns the full transcript so the page can
//! render existing exchanges on load.

use crate::handlers::AppState;
use crate::history::Exchange;
use axum::{Json, extract::State};
use serde::Serialize;

/// Transcript as returned to the browser
#[derive(Debug, Serialize)]
pub struct TranscriptView {
    model: String,
    exchanges: Vec<Exchange>,
}

impl TranscriptView {
    pub fn new(model: String, exchanges: Vec<Exchange>) -> Self {
        Self { model, exchanges }
    }
}

/// GET /api/history handler
pub async fn handler(State(state): State<AppState>) -> Json<TranscriptView> {
    let exchanges = state.transcript().snapshot().await;
    Json(TranscriptView::new(
        state.client().model().to_string(),
        exchanges,
    ))
}

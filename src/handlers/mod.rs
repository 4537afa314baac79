//! HTTP request handlers for the Parlor API

use crate::config::Config;
use crate::error::AppResult;
use crate::history::Transcript;
use crate::middleware::request_id_middleware;
use crate::ollama::OllamaClient;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod chat;
pub mod health;
pub mod history;
pub mod index;

/// Application state shared across all handlers
///
/// All fields are Arc'd for cheap cloning across Axum handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    client: Arc<OllamaClient>,
    transcript: Arc<Transcript>,
}

impl AppState {
    /// Create a new AppState from configuration
    pub fn new(config: Config) -> AppResult<Self> {
        let client = OllamaClient::from_config(&config)?;

        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(client),
            transcript: Arc::new(Transcript::new()),
        })
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get reference to the model client
    pub fn client(&self) -> &OllamaClient {
        &self.client
    }

    /// Get reference to the conversation transcript
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

/// Build the application router with all routes and middleware
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::handler))
        .route("/api/chat", post(chat::handler))
        .route("/api/history", get(history::handler))
        .route("/health", get(health::handler))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

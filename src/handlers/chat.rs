//! Chat endpoint handler
//!
//! Handles POST /api/chat: forwards the message to the model endpoint,
//! records the completed exchange, and returns the updated transcript.

use crate::error::AppError;
use crate::handlers::AppState;
use crate::handlers::history::TranscriptView;
use crate::middleware::RequestId;
use axum::{Extension, Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum allowed message length in characters (100K chars)
const MAX_MESSAGE_LENGTH: usize = 100_000;

/// Chat request from the browser
///
/// Validation is enforced during deserialization - invalid instances cannot exist.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    message: String,
}

impl ChatRequest {
    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Custom Deserialize implementation that validates during deserialization
impl<'de> Deserialize<'de> for ChatRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawChatRequest {
            message: String,
        }

        let raw = RawChatRequest::deserialize(deserializer)?;

        // Validate message is not empty or whitespace-only
        if raw.message.trim().is_empty() {
            return Err(serde::de::Error::custom(
                "message cannot be empty or contain only whitespace",
            ));
        }

        // Validate message length (count Unicode characters, not bytes)
        let char_count = raw.message.chars().count();
        if char_count > MAX_MESSAGE_LENGTH {
            return Err(serde::de::Error::custom(format!(
                "message exceeds maximum length of {} characters (got {})",
                MAX_MESSAGE_LENGTH, char_count
            )));
        }

        Ok(ChatRequest {
            message: raw.message,
        })
    }
}

/// POST /api/chat handler
///
/// Issues exactly one generate request for the submitted message and drains
/// the streamed reply to completion before answering. Earlier exchanges are
/// not forwarded; the prompt is the newest message alone. The browser gets
/// the full updated transcript back in a single response.
///
/// On upstream failure nothing is appended; the transcript only ever holds
/// completed exchanges.
pub async fn handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(
        request_id = %request_id,
        message_chars = request.message().chars().count(),
        "Received chat message"
    );

    let output = state.client().generate(request.message()).await?;

    tracing::info!(
        request_id = %request_id,
        output_chars = output.chars().count(),
        "Generation complete"
    );

    state
        .transcript()
        .append(request.message().to_string(), output)
        .await;

    let exchanges = state.transcript().snapshot().await;
    let view = TranscriptView::new(state.client().model().to_string(), exchanges);

    Ok(Json(view))
}

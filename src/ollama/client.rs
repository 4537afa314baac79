//! HTTP client for the generate endpoint
//!
//! Issues one POST per chat message and drains the streamed NDJSON reply
//! into the final output text. The configured request timeout bounds the
//! whole exchange, including the streamed body.

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::ollama::ndjson::FragmentAccumulator;
use futures::StreamExt;
use serde::Serialize;
use std::time::Duration;

/// Longest prefix of an upstream error body echoed into error messages
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// Wire payload for the generate endpoint
///
/// Exactly two fields. The endpoint streams by default, so no `stream`
/// flag is sent.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

/// Client bound to one model on one generate endpoint
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    generate_url: String,
    model: String,
    timeout_seconds: u64,
}

impl OllamaClient {
    /// Build a client from application configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let timeout_seconds = config.server.request_timeout_seconds;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|error| {
                AppError::Internal(format!("Failed to build HTTP client: {error}"))
            })?;

        Ok(Self {
            http,
            generate_url: config.model.generate_url.clone(),
            model: config.model.name.clone(),
            timeout_seconds,
        })
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate endpoint URL
    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    /// Send one prompt and return the concatenated streamed reply
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        tracing::debug!(
            model = %self.model,
            endpoint = %self.generate_url,
            prompt_chars = prompt.chars().count(),
            "Dispatching generate request"
        );

        let request = GenerateRequest {
            model: &self.model,
            prompt,
        };

        let response = self
            .http
            .post(&self.generate_url)
            .json(&request)
            .send()
            .await
            .map_err(|error| self.send_error(error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ModelQueryFailed {
                endpoint: self.generate_url.clone(),
                reason: format!("HTTP {}: {}", status, body_preview(&body)),
            });
        }

        let mut accumulator = FragmentAccumulator::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(bytes) => accumulator.push_chunk(&bytes),
                Err(error) if error.is_timeout() => {
                    return Err(AppError::ModelEndpointTimeout {
                        endpoint: self.generate_url.clone(),
                        timeout_seconds: self.timeout_seconds,
                    });
                }
                Err(error) => {
                    tracing::warn!(error = %error, "Generate stream failed mid-body");
                    return Err(AppError::StreamInterrupted {
                        endpoint: self.generate_url.clone(),
                        bytes_received: accumulator.bytes_received(),
                        records_received: accumulator.records(),
                    });
                }
            }
        }

        Ok(accumulator.finish())
    }

    fn send_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ModelEndpointTimeout {
                endpoint: self.generate_url.clone(),
                timeout_seconds: self.timeout_seconds,
            }
        } else {
            AppError::ModelQueryFailed {
                endpoint: self.generate_url.clone(),
                reason: error.to_string(),
            }
        }
    }
}

/// Short rendering of an upstream error body for error messages
fn body_preview(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }
    if trimmed.chars().count() <= ERROR_BODY_PREVIEW_CHARS {
        trimmed.to_string()
    } else {
        let mut preview: String = trimmed.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    }
}

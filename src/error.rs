//! Error types for Parlor
//!
//! All errors implement `IntoResponse` for Axum handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration file {path}: {source}")]
    ConfigFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration in {path}: {reason}")]
    ConfigValidationFailed { path: String, reason: String },

    #[error("Failed to query model at {endpoint}: {reason}")]
    ModelQueryFailed { endpoint: String, reason: String },

    #[error("Request to {endpoint} timed out after {timeout_seconds} seconds")]
    ModelEndpointTimeout {
        endpoint: String,
        timeout_seconds: u64,
    },

    #[error(
        "Stream interrupted from {endpoint} after receiving {bytes_received} bytes ({records_received} records)"
    )]
    StreamInterrupted {
        endpoint: String,
        bytes_received: usize,
        records_received: usize,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Config(_)
            | Self::ConfigFileRead { .. }
            | Self::ConfigParseFailed { .. }
            | Self::ConfigValidationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ModelQueryFailed { .. } => StatusCode::BAD_GATEWAY,
            Self::ModelEndpointTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::StreamInterrupted { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AppError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }

    #[test]
    fn test_model_query_failed_display() {
        let err = AppError::ModelQueryFailed {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to query model at http://localhost:11434/api/generate: connection refused"
        );
    }

    #[test]
    fn test_timeout_display_includes_budget() {
        let err = AppError::ModelEndpointTimeout {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            timeout_seconds: 120,
        };
        assert!(err.to_string().contains("120 seconds"));
    }

    #[test]
    fn test_stream_interrupted_display_includes_counts() {
        let err = AppError::StreamInterrupted {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            bytes_received: 512,
            records_received: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("512 bytes"));
        assert!(msg.contains("7 records"));
    }

    #[test]
    fn test_config_error_response_status() {
        let err = AppError::Config("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_model_query_failed_response_status() {
        let err = AppError::ModelQueryFailed {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            reason: "boom".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_timeout_response_status() {
        let err = AppError::ModelEndpointTimeout {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            timeout_seconds: 1,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_stream_interrupted_response_status() {
        let err = AppError::StreamInterrupted {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            bytes_received: 0,
            records_received: 0,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_error_response_status() {
        let err = AppError::Internal("unexpected state".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

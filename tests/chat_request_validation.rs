//! Integration tests for chat request validation over HTTP
//!
//! Validation runs during JSON extraction, so invalid requests are
//! rejected before any upstream call is attempted:
//! - Empty / whitespace-only / over-length messages -> 422
//! - Syntactically broken JSON -> 400
//! - Wrong content type -> 415
//! - Wrong method -> 405

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use parlor::{config::Config, handlers, handlers::AppState};
use tower::ServiceExt;

/// The endpoint is only reached by the final test, so an unroutable URL
/// with a short budget keeps the suite fast
fn create_test_app() -> Router {
    let toml = r#"
[server]
host = "127.0.0.1"
port = 7860
request_timeout_seconds = 1

[model]
name = "test-model"
generate_url = "http://192.0.2.1:11434/api/generate"
"#;
    let config: Config = toml::from_str(toml).expect("should parse TOML config");
    let state = AppState::new(config).expect("AppState::new should succeed");
    handlers::app(state)
}

async fn post_chat_raw(app: Router, body: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_empty_message_returns_422() {
    let app = create_test_app();
    let response = post_chat_raw(app, r#"{"message": ""}"#).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_whitespace_only_message_returns_422() {
    let app = create_test_app();
    let response = post_chat_raw(app, r#"{"message": " \t\n "}"#).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_over_length_message_returns_422() {
    let app = create_test_app();
    let body = serde_json::json!({"message": "a".repeat(100_001)}).to_string();
    let response = post_chat_raw(app, &body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_message_field_returns_422() {
    let app = create_test_app();
    let response = post_chat_raw(app, r#"{"prompt": "wrong key"}"#).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let app = create_test_app();
    let response = post_chat_raw(app, "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_returns_415() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .body(Body::from(r#"{"message": "hello"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_get_on_chat_route_returns_405() {
    let app = create_test_app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/chat")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_valid_message_passes_validation() {
    // Passes extraction, then fails upstream (unroutable endpoint);
    // any non-4xx status here proves validation accepted the message
    let app = create_test_app();
    let response = post_chat_raw(app, r#"{"message": "hello"}"#).await;
    assert!(
        !response.status().is_client_error(),
        "Valid message must not be rejected, got: {}",
        response.status()
    );
}

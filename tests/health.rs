//! Integration tests for GET /health

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use parlor::{config::Config, handlers, handlers::AppState};
use tower::ServiceExt;

fn create_test_app() -> Router {
    let toml = r#"
[server]
host = "127.0.0.1"
port = 7860
request_timeout_seconds = 30

[model]
name = "gemma2:latest"
generate_url = "http://localhost:11434/api/generate"
"#;
    let config: Config = toml::from_str(toml).expect("should parse TOML config");
    let state = AppState::new(config).expect("AppState::new should succeed");
    handlers::app(state)
}

#[tokio::test]
async fn test_health_returns_ok_with_model() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["model"], "gemma2:latest");
}

#[tokio::test]
async fn test_health_does_not_probe_the_model_endpoint() {
    // The configured endpoint does not exist; health must still answer
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

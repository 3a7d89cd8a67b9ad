use super::mocks::MockTextGenerator;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bfhl_service::{
    Result,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    dispatch::Dispatcher,
    server::{AppState, router},
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tempfile::TempDir;
use tokio::fs;
use tower::ServiceExt; // for `oneshot`

pub const TEST_EMAIL: &str = "tester@example.com";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            official_email: TEST_EMAIL.to_string(),
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: "http://localhost:9".to_string(),
            api_key: "test-api-key".to_string(),
            model: "test-model".to_string(),
            timeout_secs: 5,
        },
    }
}

pub fn create_dispatcher(generator: MockTextGenerator, timeout: Duration) -> Dispatcher {
    Dispatcher::new(Arc::new(generator), timeout)
}

/// Router wired to a mock generator
pub fn create_test_app(generator: MockTextGenerator) -> Router {
    create_test_app_with_timeout(generator, Duration::from_secs(5))
}

pub fn create_test_app_with_timeout(generator: MockTextGenerator, timeout: Duration) -> Router {
    let state = AppState {
        official_email: Arc::from(TEST_EMAIL),
        dispatcher: Arc::new(create_dispatcher(generator, timeout)),
    };
    router(state)
}

pub fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends a request and decodes the JSON response body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  official_email: "ops@example.com"
  logs:
    level: "debug"
llm:
  base_url: "http://localhost:11434/v1"
  api_key: "yaml-key"
  model: "llama3"
  timeout_secs: 4
"#;

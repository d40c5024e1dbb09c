//! Tests for the hosted inference client.

use mockito::Matcher;
use reqwest::StatusCode;

use super::*;
use crate::backends::HttpOptions;
use crate::{BackendError, InferenceBackend};

fn client(endpoint: &str) -> HostedClient {
    HostedClient::new(HostedConfig::new(endpoint), &HttpOptions::default()).unwrap()
}

#[test]
fn request_body_carries_inputs_and_max_length() {
    let client = HostedClient::new(
        HostedConfig::new("https://example.invalid/models/phi").with_max_length(64),
        &HttpOptions::default(),
    )
    .unwrap();
    let body = client.build_request_body("hello");
    assert_eq!(body["inputs"], "hello");
    assert_eq!(body["parameters"]["max_length"], 64);
}

#[test]
fn parses_generated_text_array() {
    let json = serde_json::json!([{ "generated_text": "  Hi there  " }]);
    let text = client("http://localhost").parse_response(&json).unwrap();
    assert_eq!(text, "  Hi there  ");
}

#[test]
fn parses_generated_text_object() {
    let json = serde_json::json!({ "generated_text": "Hi" });
    assert_eq!(client("http://localhost").parse_response(&json).unwrap(), "Hi");
}

#[test]
fn missing_generated_text_is_backend_error() {
    let json = serde_json::json!([]);
    let err = client("http://localhost").parse_response(&json).unwrap_err();
    assert!(matches!(err, BackendError::Backend(_)));
}

#[test]
fn loading_error_is_warming_up() {
    let err = client("http://localhost").parse_error(
        StatusCode::SERVICE_UNAVAILABLE,
        r#"{"error": "Model microsoft/Phi-3-mini-4k-instruct is currently loading", "estimated_time": 20.0}"#,
    );
    assert!(matches!(err, BackendError::WarmingUp(_)));
}

#[test]
fn other_error_keeps_detail() {
    let err = client("http://localhost")
        .parse_error(StatusCode::BAD_REQUEST, r#"{"error": "Authorization header is invalid"}"#);
    assert_eq!(
        err,
        BackendError::Backend("Authorization header is invalid".into())
    );
}

#[test]
fn debug_redacts_token() {
    let config = HostedConfig::new("http://localhost").with_token("hf_secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("hf_secret"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn token_from_unset_env_is_none() {
    let config = HostedConfig::new("http://localhost")
        .with_token_from_env("MATERIA_TEST_TOKEN_THAT_IS_NEVER_SET");
    assert!(config.token.is_none());
}

#[tokio::test]
async fn complete_posts_json_with_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/phi")
        .match_header("authorization", "Bearer secret-token")
        .match_body(Matcher::Json(serde_json::json!({
            "inputs": "hello",
            "parameters": { "max_length": 100 }
        })))
        .with_status(200)
        .with_body(r#"[{"generated_text": "hello back"}]"#)
        .create_async()
        .await;

    let config = HostedConfig::new(format!("{}/models/phi", server.url())).with_token("secret-token");
    let client = HostedClient::new(config, &HttpOptions::default()).unwrap();

    let text = client.complete("hello").await.unwrap();
    assert_eq!(text, "hello back");
    mock.assert_async().await;
}

#[tokio::test]
async fn complete_reports_loading_as_warming_up() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/phi")
        .with_status(503)
        .with_body(r#"{"error": "Model is currently loading", "estimated_time": 12.5}"#)
        .create_async()
        .await;

    let client = client(&format!("{}/models/phi", server.url()));
    let err = client.complete("hello").await.unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn complete_reports_backend_error_detail() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/phi")
        .with_status(400)
        .with_body(r#"{"error": "Input is too long"}"#)
        .create_async()
        .await;

    let client = client(&format!("{}/models/phi", server.url()));
    let err = client.complete("hello").await.unwrap_err();
    assert_eq!(err, BackendError::Backend("Input is too long".into()));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let client = client("http://127.0.0.1:1/models/phi");
    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)));
}

#[tokio::test]
async fn invalid_endpoint_is_request_setup_error() {
    let client = client("not a url");
    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, BackendError::RequestSetup(_)));
}

//! Local client struct, request building, and response parsing.

use reqwest::StatusCode;

use crate::backends::transport::{error_detail, error_field, HttpOptions};
use crate::BackendError;

use super::config::LocalConfig;

/// One parsed line of a chat stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChatChunk {
    pub text: Option<String>,
    pub done: bool,
}

/// Local model server client.
pub struct LocalClient {
    pub(crate) config: LocalConfig,
    pub(crate) http: reqwest::Client,
}

impl LocalClient {
    pub fn new(config: LocalConfig, options: &HttpOptions) -> Result<Self, BackendError> {
        Ok(Self {
            config,
            http: options.build_client()?,
        })
    }

    pub fn config(&self) -> &LocalConfig {
        &self.config
    }

    /// Body for `/api/generate`.
    pub(crate) fn build_generate_body(&self, prompt: &str) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
        });
        if let Some(ref format) = self.config.format {
            body["format"] = serde_json::json!(format);
        }
        body
    }

    /// Body for `/api/chat`.
    pub(crate) fn build_chat_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": prompt }],
            "stream": true,
        })
    }

    /// Parse a `/api/generate` response body.
    pub(crate) fn parse_generate(&self, json: &serde_json::Value) -> Result<String, BackendError> {
        if let Some(detail) = error_field(json) {
            return Err(classify_error(StatusCode::OK, detail));
        }
        json["response"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| BackendError::Backend("response did not contain a response field".into()))
    }

    /// Parse one `/api/chat` stream line.
    pub(crate) fn parse_chat_chunk(json: &serde_json::Value) -> Result<ChatChunk, BackendError> {
        if let Some(detail) = error_field(json) {
            return Err(BackendError::Stream(detail));
        }
        let text = json["message"]["content"]
            .as_str()
            .filter(|t| !t.is_empty())
            .map(String::from);
        let done = json["done"].as_bool().unwrap_or(false);
        Ok(ChatChunk { text, done })
    }

    /// Map a non-success HTTP response to a backend error.
    pub(crate) fn parse_error(&self, status: StatusCode, body: &str) -> BackendError {
        classify_error(status, error_detail(status, body))
    }
}

fn classify_error(status: StatusCode, detail: String) -> BackendError {
    let lower = detail.to_ascii_lowercase();
    if status == StatusCode::SERVICE_UNAVAILABLE
        || lower.contains("loading model")
        || lower.contains("currently loading")
    {
        BackendError::WarmingUp(detail)
    } else {
        BackendError::Backend(detail)
    }
}

//! Hosted client struct, request building, and response parsing.

use reqwest::StatusCode;

use crate::backends::transport::{error_detail, error_field, HttpOptions};
use crate::BackendError;

use super::config::HostedConfig;

/// Hosted inference API client.
pub struct HostedClient {
    pub(crate) config: HostedConfig,
    pub(crate) http: reqwest::Client,
}

impl HostedClient {
    pub fn new(config: HostedConfig, options: &HttpOptions) -> Result<Self, BackendError> {
        Ok(Self {
            config,
            http: options.build_client()?,
        })
    }

    pub fn config(&self) -> &HostedConfig {
        &self.config
    }

    /// Build the JSON request body.
    pub(crate) fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "inputs": prompt,
            "parameters": {
                "max_length": self.config.max_length,
            },
        })
    }

    /// Parse a successful response body.
    ///
    /// The API answers with `[{"generated_text": ...}]`; some deployments
    /// return the object without the array, or report an error with 200.
    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> Result<String, BackendError> {
        if let Some(detail) = error_field(json) {
            return Err(classify_error(detail));
        }

        let first = match json {
            serde_json::Value::Array(items) => items.first(),
            other => Some(other),
        };

        first
            .and_then(|item| item.get("generated_text"))
            .and_then(|text| text.as_str())
            .map(String::from)
            .ok_or_else(|| {
                BackendError::Backend("response did not contain generated_text".into())
            })
    }

    /// Map a non-success HTTP response to a backend error.
    pub(crate) fn parse_error(&self, status: StatusCode, body: &str) -> BackendError {
        let warming = status == StatusCode::SERVICE_UNAVAILABLE && body.contains("estimated_time");
        let detail = error_detail(status, body);
        if warming {
            BackendError::WarmingUp(detail)
        } else {
            classify_error(detail)
        }
    }
}

fn classify_error(detail: String) -> BackendError {
    if detail.to_ascii_lowercase().contains("currently loading") {
        BackendError::WarmingUp(detail)
    } else {
        BackendError::Backend(detail)
    }
}

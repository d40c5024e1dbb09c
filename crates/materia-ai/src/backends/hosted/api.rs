//! InferenceBackend trait implementation for HostedClient.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::backends::transport::classify_send_error;
use crate::{BackendError, InferenceBackend};

use super::client::HostedClient;

#[async_trait]
impl InferenceBackend for HostedClient {
    fn name(&self) -> &str {
        "hosted"
    }

    fn retry_delay(&self) -> Duration {
        self.config.retry_delay
    }

    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        let body = self.build_request_body(prompt);

        debug!(endpoint = %self.config.endpoint, "hosted inference request");

        let mut request = self.http.post(&self.config.endpoint).json(&body);
        if let Some(ref token) = self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(classify_send_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(self.parse_error(status, &text));
        }

        let json: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| BackendError::Backend(format!("invalid response JSON: {e}")))?;

        self.parse_response(&json)
    }
}

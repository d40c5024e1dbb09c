//! InferenceBackend trait implementation for LocalClient (generate + chat stream).

use std::future::ready;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use tracing::debug;

use crate::backends::transport::classify_send_error;
use crate::streaming::parse_ndjson_stream;
use crate::{BackendError, FragmentStream, InferenceBackend};

use super::client::LocalClient;

#[async_trait]
impl InferenceBackend for LocalClient {
    fn name(&self) -> &str {
        "local"
    }

    fn retry_delay(&self) -> Duration {
        self.config.retry_delay
    }

    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        let body = self.build_generate_body(prompt);

        debug!(model = %self.config.model, "local generate request");

        let response = self
            .http
            .post(self.config.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(classify_send_error)?;

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

        self.parse_generate(&json)
    }

    async fn open_stream(&self, prompt: &str) -> Result<FragmentStream, BackendError> {
        let body = self.build_chat_body(prompt);

        debug!(model = %self.config.model, "local chat streaming request");

        let response = self
            .http
            .post(self.config.chat_url())
            .json(&body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(self.parse_error(status, &text));
        }

        let fragments = parse_ndjson_stream(response)
            .scan(false, |finished, item| {
                if *finished {
                    return ready(None);
                }
                let out = match item.and_then(|json| LocalClient::parse_chat_chunk(&json)) {
                    Ok(chunk) => {
                        *finished = chunk.done;
                        chunk.text.map(Ok)
                    }
                    Err(e) => {
                        *finished = true;
                        Some(Err(e))
                    }
                };
                ready(Some(out))
            })
            .filter_map(ready);

        Ok(Box::pin(fragments))
    }
}

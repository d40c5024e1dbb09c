//! Inference client: a backend plus a retry policy, producing chat turns.
//!
//! Every outcome becomes an assistant [`ChatTurn`]. Failures are rendered
//! as human-readable `Error: ...` messages instead of being returned.

use std::sync::Arc;

use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::retry::RetryPolicy;
use crate::session::ChatTurn;
use crate::{BackendError, FragmentStream, InferenceBackend};

/// Message for a model that is still loading after the retry budget.
pub const LOADING_MESSAGE: &str = "Error: Model is currently loading. Please try again later.";

/// Message for a request that never got a response.
pub const NO_RESPONSE_MESSAGE: &str = "Error: No response received from the server.";

/// Render a terminal backend failure as chat text.
pub fn error_message(err: &BackendError) -> String {
    match err {
        BackendError::WarmingUp(_) => LOADING_MESSAGE.to_string(),
        BackendError::Transport(_) => NO_RESPONSE_MESSAGE.to_string(),
        BackendError::Backend(detail)
        | BackendError::RequestSetup(detail)
        | BackendError::Stream(detail) => format!("Error: {detail}"),
    }
}

/// Sends prompts to one backend under a retry policy.
pub struct InferenceClient {
    backend: Arc<dyn InferenceBackend>,
    policy: RetryPolicy,
}

impl InferenceClient {
    /// Client with the default attempt budget and the backend's own delay.
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        let policy = RetryPolicy::new(RetryPolicy::DEFAULT_MAX_ATTEMPTS, backend.retry_delay());
        Self { backend, policy }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Fetch a whole completion. Never fails; errors become the turn's text.
    pub async fn fetch_completion(&self, prompt: &str) -> ChatTurn {
        let backend = self.backend.as_ref();
        let result = self
            .policy
            .run(move |attempt| {
                debug!(backend = backend.name(), attempt, "requesting completion");
                backend.complete(prompt)
            })
            .await;

        match result {
            Ok(text) => ChatTurn::assistant(text.trim()),
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "completion failed");
                ChatTurn::assistant(error_message(&e))
            }
        }
    }

    /// Open a fragment stream, retrying only the open step.
    pub async fn open_stream(&self, prompt: &str) -> Result<FragmentStream, BackendError> {
        let backend = self.backend.as_ref();
        self.policy
            .run(move |attempt| {
                debug!(backend = backend.name(), attempt, "opening completion stream");
                backend.open_stream(prompt)
            })
            .await
    }

    /// Stream a completion, handing every fragment to `on_fragment` as it
    /// arrives. The accumulated text becomes the returned turn.
    ///
    /// A stream that breaks after producing text keeps that text and gets
    /// an error marker appended.
    pub async fn stream_completion<F>(&self, prompt: &str, mut on_fragment: F) -> ChatTurn
    where
        F: FnMut(&str),
    {
        let mut stream = match self.open_stream(prompt).await {
            Ok(stream) => stream,
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "stream open failed");
                return ChatTurn::assistant(error_message(&e));
            }
        };

        let mut partial = String::new();
        while let Some(item) = stream.next().await {
            match item {
                Ok(fragment) => {
                    partial.push_str(&fragment);
                    on_fragment(&fragment);
                }
                Err(e) => {
                    warn!(
                        backend = self.backend.name(),
                        received = partial.len(),
                        error = %e,
                        "stream interrupted"
                    );
                    return ChatTurn::assistant(interrupted_message(&partial, &e));
                }
            }
        }

        ChatTurn::assistant(partial.trim())
    }
}

fn interrupted_message(partial: &str, err: &BackendError) -> String {
    let kept = partial.trim();
    if kept.is_empty() {
        return error_message(err);
    }
    let detail = match err {
        BackendError::Stream(detail) => detail.clone(),
        other => other.to_string(),
    };
    format!("{kept}\n[Error: stream interrupted: {detail}]")
}

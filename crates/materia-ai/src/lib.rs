//! Chat engine for Materia.
//!
//! Provides the inference backends and the session model on top of them:
//! - Hosted inference API and local model server clients
//! - Newline-delimited JSON streaming
//! - Bounded retry while a model is warming up
//! - Session store with per-session in-flight guard

pub mod backends;
pub mod inference;
pub mod retry;
pub mod session;
pub mod streaming;

use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::Stream;

pub use backends::{HostedClient, HostedConfig, HttpOptions, LocalClient, LocalConfig};
pub use inference::InferenceClient;
pub use retry::{Backoff, RetryPolicy};
pub use session::{
    ChatController, ChatError, ChatTurn, PendingInput, Sender, Session, SessionStore, Submission,
};

/// Lazy, finite sequence of generated text fragments. Not restartable.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, BackendError>> + Send>>;

/// A language-model inference service.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Delay between attempts while the model is warming up.
    fn retry_delay(&self) -> Duration;

    /// Send a prompt and wait for the whole generated text.
    async fn complete(&self, prompt: &str) -> Result<String, BackendError>;

    /// Open a fragment stream for a prompt.
    ///
    /// Backends without native streaming yield the full completion as a
    /// single fragment.
    async fn open_stream(&self, prompt: &str) -> Result<FragmentStream, BackendError> {
        let text = self.complete(prompt).await?;
        let stream = futures_util::stream::once(async move { Ok::<_, BackendError>(text) });
        Ok(Box::pin(stream))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("model is warming up: {0}")]
    WarmingUp(String),
    #[error("{0}")]
    Backend(String),
    #[error("no response received: {0}")]
    Transport(String),
    #[error("{0}")]
    RequestSetup(String),
    #[error("stream interrupted: {0}")]
    Stream(String),
}

impl BackendError {
    /// Only a warming-up model is worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BackendError::WarmingUp(_))
    }
}

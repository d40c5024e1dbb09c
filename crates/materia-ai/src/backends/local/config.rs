//! Local model server configuration.

use std::time::Duration;

/// Local model server configuration.
#[derive(Debug, Clone)]
pub struct LocalConfig {
    /// Server base URL, e.g. `http://localhost:11434`.
    pub base_url: String,
    pub model: String,
    /// Optional `format` field sent with generate requests.
    pub format: Option<String>,
    pub retry_delay: Duration,
}

impl LocalConfig {
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            format: None,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub(crate) fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }

    pub(crate) fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url.trim_end_matches('/'))
    }
}

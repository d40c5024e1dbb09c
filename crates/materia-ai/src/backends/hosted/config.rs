//! Hosted inference client configuration.

use std::fmt;
use std::time::Duration;

/// Hosted inference client configuration.
#[derive(Clone)]
pub struct HostedConfig {
    pub endpoint: String,
    pub token: Option<String>,
    pub max_length: u32,
    pub retry_delay: Duration,
}

impl fmt::Debug for HostedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("max_length", &self.max_length)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

impl HostedConfig {
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            max_length: 100,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read the bearer token from an environment variable. Unset or blank
    /// variables leave the config without a token.
    pub fn with_token_from_env(mut self, var: &str) -> Self {
        self.token = std::env::var(var)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

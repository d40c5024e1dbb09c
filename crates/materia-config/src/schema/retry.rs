//! Retry policy configuration.

use serde::{Deserialize, Serialize};

/// How the delay between attempts grows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackoffKind {
    /// Same delay before every retry.
    #[default]
    Fixed,
    /// Delay doubles after every retry.
    Exponential,
}

/// Retry settings for "model is loading" responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first one (valid range: 1-10).
    pub max_attempts: u32,
    /// Delay override in milliseconds (valid range: 0-60000). When unset the
    /// backend default is used.
    pub delay_ms: Option<u64>,
    pub backoff: BackoffKind,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: None,
            backoff: BackoffKind::Fixed,
        }
    }
}

//! System configuration types: HTTP transport and logging.

use serde::{Deserialize, Serialize};

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds. Unset means no timeout.
    pub request_timeout_secs: Option<u32>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoped to the materia crates.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "materia=trace",
            LogLevel::Debug => "materia=debug",
            LogLevel::Info => "materia=info",
            LogLevel::Warn => "materia=warn",
            LogLevel::Error => "materia=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

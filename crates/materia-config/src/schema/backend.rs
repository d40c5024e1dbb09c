//! Inference backend configuration types.

use serde::{Deserialize, Serialize};

/// Which inference backend the chat talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Hosted inference API (`{inputs, parameters}` request, bearer token).
    #[default]
    Hosted,
    /// Local model server, blocking `/api/generate` call.
    Local,
    /// Local model server, streaming `/api/chat` call.
    LocalStream,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Hosted => "hosted",
            BackendKind::Local => "local",
            BackendKind::LocalStream => "local-stream",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hosted" => Ok(BackendKind::Hosted),
            "local" => Ok(BackendKind::Local),
            "local-stream" | "local_stream" => Ok(BackendKind::LocalStream),
            other => Err(format!(
                "unknown backend '{other}' (expected hosted, local or local-stream)"
            )),
        }
    }
}

/// Hosted inference endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostedBackendConfig {
    pub endpoint: String,
    /// `parameters.max_length` sent with every request (valid range: 1-4096).
    pub max_length: u32,
    /// Environment variable holding the bearer token.
    pub token_env: String,
}

impl Default for HostedBackendConfig {
    fn default() -> Self {
        Self {
            endpoint:
                "https://api-inference.huggingface.co/models/microsoft/Phi-3-mini-4k-instruct"
                    .into(),
            max_length: 100,
            token_env: "HF_API_TOKEN".into(),
        }
    }
}

/// Local model server settings, shared by the generate and chat-stream calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalBackendConfig {
    /// Server base URL; `/api/generate` and `/api/chat` are appended.
    pub endpoint: String,
    pub model: String,
    /// Optional `format` field for `/api/generate` (e.g. "json").
    pub format: Option<String>,
}

impl Default for LocalBackendConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".into(),
            model: "llama3".into(),
            format: None,
        }
    }
}

/// Backend selection plus per-backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub kind: BackendKind,
    pub hosted: HostedBackendConfig,
    pub local: LocalBackendConfig,
}

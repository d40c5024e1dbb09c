//! Configuration schema types for Materia.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults.

mod backend;
mod retry;
mod system;

pub use backend::*;
pub use retry::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Materia.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MateriaConfig {
    pub backend: BackendConfig,
    pub retry: RetryConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_hosted() {
        let config = MateriaConfig::default();
        assert_eq!(config.backend.kind, BackendKind::Hosted);
        assert_eq!(
            config.backend.hosted.endpoint,
            "https://api-inference.huggingface.co/models/microsoft/Phi-3-mini-4k-instruct"
        );
        assert_eq!(config.backend.hosted.max_length, 100);
        assert_eq!(config.backend.hosted.token_env, "HF_API_TOKEN");
    }

    #[test]
    fn default_local_backend() {
        let config = MateriaConfig::default();
        assert_eq!(config.backend.local.endpoint, "http://localhost:11434");
        assert_eq!(config.backend.local.model, "llama3");
        assert!(config.backend.local.format.is_none());
    }

    #[test]
    fn default_retry() {
        let config = MateriaConfig::default();
        assert_eq!(config.retry.max_attempts, 3);
        assert!(config.retry.delay_ms.is_none());
        assert_eq!(config.retry.backoff, BackoffKind::Fixed);
    }

    #[test]
    fn default_http_has_no_request_timeout() {
        let config = MateriaConfig::default();
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert!(config.http.request_timeout_secs.is_none());
    }

    #[test]
    fn backend_kind_parses_kebab_case() {
        let config: MateriaConfig = toml::from_str(
            r#"
[backend]
kind = "local-stream"
"#,
        )
        .unwrap();
        assert_eq!(config.backend.kind, BackendKind::LocalStream);
    }

    #[test]
    fn backend_kind_from_str() {
        assert_eq!("hosted".parse::<BackendKind>().unwrap(), BackendKind::Hosted);
        assert_eq!("LOCAL".parse::<BackendKind>().unwrap(), BackendKind::Local);
        assert_eq!(
            "local-stream".parse::<BackendKind>().unwrap(),
            BackendKind::LocalStream
        );
        assert!("remote".parse::<BackendKind>().is_err());
    }

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::Info.as_directive(), "materia=info");
        assert_eq!(LogLevel::Trace.as_directive(), "materia=trace");
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: MateriaConfig = toml::from_str("").unwrap();
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.logging.level, LogLevel::Info);
    }
}

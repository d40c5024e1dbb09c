//! Builds the inference client described by the configuration.

use std::sync::Arc;
use std::time::Duration;

use materia_ai::{
    Backoff, BackendError, HostedClient, HostedConfig, HttpOptions, InferenceBackend,
    InferenceClient, LocalClient, LocalConfig, RetryPolicy,
};
use materia_common::MateriaError;
use materia_config::schema::{BackendKind, BackoffKind, HttpConfig, MateriaConfig, RetryConfig};

/// The configured client and whether answers should be streamed.
pub struct ChatBackend {
    pub client: InferenceClient,
    pub streaming: bool,
}

pub fn build(config: &MateriaConfig) -> Result<ChatBackend, MateriaError> {
    let options = http_options(&config.http);
    let kind = config.backend.kind;

    let backend: Arc<dyn InferenceBackend> = match kind {
        BackendKind::Hosted => {
            let hosted = &config.backend.hosted;
            if std::env::var(&hosted.token_env).map_or(true, |v| v.trim().is_empty()) {
                tracing::warn!(
                    "{} is not set, sending requests without a bearer token",
                    hosted.token_env
                );
            }
            let cfg = HostedConfig::new(&hosted.endpoint)
                .with_token_from_env(&hosted.token_env)
                .with_max_length(hosted.max_length);
            Arc::new(HostedClient::new(cfg, &options).map_err(backend_error)?)
        }
        BackendKind::Local | BackendKind::LocalStream => {
            let local = &config.backend.local;
            let mut cfg = LocalConfig::new(&local.endpoint, &local.model);
            if let Some(ref format) = local.format {
                cfg = cfg.with_format(format);
            }
            Arc::new(LocalClient::new(cfg, &options).map_err(backend_error)?)
        }
    };

    let policy = retry_policy(&config.retry, backend.retry_delay());
    tracing::info!(
        "Backend: {kind} ({} attempts, {} ms delay)",
        policy.max_attempts(),
        policy.delay_for(0).as_millis()
    );

    Ok(ChatBackend {
        client: InferenceClient::new(backend).with_policy(policy),
        streaming: kind == BackendKind::LocalStream,
    })
}

fn http_options(http: &HttpConfig) -> HttpOptions {
    HttpOptions {
        connect_timeout: Duration::from_secs(u64::from(http.connect_timeout_secs)),
        request_timeout: http
            .request_timeout_secs
            .map(|secs| Duration::from_secs(u64::from(secs))),
    }
}

/// Config overrides on top of the backend's own delay.
fn retry_policy(retry: &RetryConfig, backend_delay: Duration) -> RetryPolicy {
    let delay = retry
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(backend_delay);
    let backoff = match retry.backoff {
        BackoffKind::Fixed => Backoff::Fixed,
        BackoffKind::Exponential => Backoff::Exponential,
    };
    RetryPolicy::new(retry.max_attempts, delay).with_backoff(backoff)
}

fn backend_error(e: BackendError) -> MateriaError {
    MateriaError::Backend(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_delay_defaults_to_backend() {
        let policy = retry_policy(&RetryConfig::default(), Duration::from_millis(1000));
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay_for(0), Duration::from_millis(1000));
    }

    #[test]
    fn configured_delay_and_backoff_win() {
        let retry = RetryConfig {
            max_attempts: 5,
            delay_ms: Some(250),
            backoff: BackoffKind::Exponential,
        };
        let policy = retry_policy(&retry, Duration::from_millis(2000));
        assert_eq!(policy.max_attempts(), 5);
        assert_eq!(policy.delay_for(0), Duration::from_millis(250));
        assert_eq!(policy.delay_for(1), Duration::from_millis(500));
    }

    #[test]
    fn request_timeout_is_optional() {
        let options = http_options(&HttpConfig::default());
        assert_eq!(options.connect_timeout, Duration::from_secs(10));
        assert!(options.request_timeout.is_none());
    }

    #[test]
    fn builds_each_backend_kind() {
        for kind in [BackendKind::Hosted, BackendKind::Local, BackendKind::LocalStream] {
            let mut config = MateriaConfig::default();
            config.backend.kind = kind;
            let backend = build(&config).unwrap();
            assert_eq!(backend.streaming, kind == BackendKind::LocalStream);
        }
    }
}

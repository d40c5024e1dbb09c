//! Shared HTTP plumbing: client construction and error classification.

use std::time::Duration;

use reqwest::StatusCode;

use crate::BackendError;

/// HTTP client settings shared by all backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    /// Whole-request timeout. `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

impl HttpOptions {
    pub(crate) fn build_client(&self) -> Result<reqwest::Client, BackendError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.connect_timeout);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| BackendError::RequestSetup(format!("failed to build HTTP client: {e}")))
    }
}

/// Classify an error returned by `RequestBuilder::send`.
pub(crate) fn classify_send_error(err: reqwest::Error) -> BackendError {
    if err.is_builder() {
        BackendError::RequestSetup(err.to_string())
    } else {
        BackendError::Transport(err.to_string())
    }
}

/// Extract the backend's error detail from a JSON body like `{"error": "..."}`.
///
/// Falls back to the status line plus a clipped body.
pub(crate) fn error_detail(status: StatusCode, body: &str) -> String {
    if let Some(detail) = json_error(body) {
        return detail;
    }
    let text: String = body.trim().chars().take(200).collect();
    if text.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {text}")
    }
}

/// The `error` field of a JSON object body, as a string.
pub(crate) fn json_error(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    error_field(&json)
}

pub(crate) fn error_field(json: &serde_json::Value) -> Option<String> {
    match json.get("error")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Object(obj) => obj
            .get("message")
            .and_then(|m| m.as_str())
            .map(String::from),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_from_error_string() {
        let detail = error_detail(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Input validation error"}"#,
        );
        assert_eq!(detail, "Input validation error");
    }

    #[test]
    fn detail_from_error_object() {
        let detail = error_detail(
            StatusCode::UNAUTHORIZED,
            r#"{"error": {"message": "Invalid token"}}"#,
        );
        assert_eq!(detail, "Invalid token");
    }

    #[test]
    fn detail_from_error_list() {
        let detail = error_detail(StatusCode::BAD_REQUEST, r#"{"error": ["a", "b"]}"#);
        assert_eq!(detail, "a; b");
    }

    #[test]
    fn detail_falls_back_to_status_and_body() {
        let detail = error_detail(StatusCode::BAD_GATEWAY, "upstream failed");
        assert_eq!(detail, "HTTP 502 Bad Gateway: upstream failed");
    }

    #[test]
    fn detail_for_empty_body_is_status() {
        let detail = error_detail(StatusCode::INTERNAL_SERVER_ERROR, "  ");
        assert_eq!(detail, "HTTP 500 Internal Server Error");
    }

    #[test]
    fn long_body_is_clipped() {
        let body = "x".repeat(1000);
        let detail = error_detail(StatusCode::BAD_GATEWAY, &body);
        assert!(detail.len() < 250);
    }

    #[test]
    fn default_options_have_no_request_timeout() {
        let options = HttpOptions::default();
        assert_eq!(options.connect_timeout, Duration::from_secs(10));
        assert!(options.request_timeout.is_none());
        assert!(options.build_client().is_ok());
    }
}

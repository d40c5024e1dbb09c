//! Validation for the retry and http sections.

use crate::schema::MateriaConfig;

use super::helpers::validate_range;

/// Validate retry constraints.
pub(crate) fn validate_retry(errors: &mut Vec<String>, config: &MateriaConfig) {
    validate_range(
        errors,
        "retry.max_attempts",
        u64::from(config.retry.max_attempts),
        1,
        10,
    );
    if let Some(delay) = config.retry.delay_ms {
        validate_range(errors, "retry.delay_ms", delay, 0, 60_000);
    }
}

/// Validate http constraints.
pub(crate) fn validate_http(errors: &mut Vec<String>, config: &MateriaConfig) {
    validate_range(
        errors,
        "http.connect_timeout_secs",
        u64::from(config.http.connect_timeout_secs),
        1,
        120,
    );
    if let Some(timeout) = config.http.request_timeout_secs {
        validate_range(
            errors,
            "http.request_timeout_secs",
            u64::from(timeout),
            1,
            3600,
        );
    }
}

//! Validation for the backend sections.

use crate::schema::MateriaConfig;

use super::helpers::{validate_http_url, validate_non_empty, validate_range};

/// Validate hosted backend constraints.
pub(crate) fn validate_hosted(errors: &mut Vec<String>, config: &MateriaConfig) {
    let hosted = &config.backend.hosted;
    validate_http_url(errors, "backend.hosted.endpoint", &hosted.endpoint);
    validate_range(
        errors,
        "backend.hosted.max_length",
        u64::from(hosted.max_length),
        1,
        4096,
    );
    validate_non_empty(errors, "backend.hosted.token_env", &hosted.token_env);
}

/// Validate local backend constraints.
pub(crate) fn validate_local(errors: &mut Vec<String>, config: &MateriaConfig) {
    let local = &config.backend.local;
    validate_http_url(errors, "backend.local.endpoint", &local.endpoint);
    validate_non_empty(errors, "backend.local.model", &local.model);
    if let Some(ref format) = local.format {
        validate_non_empty(errors, "backend.local.format", format);
    }
}

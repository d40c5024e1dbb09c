//! Full configuration validation.
//!
//! Validates numeric ranges and endpoint formats. Each section has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod backend;
mod helpers;
mod misc;


use crate::schema::MateriaConfig;
use materia_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MateriaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    backend::validate_hosted(&mut errors, config);
    backend::validate_local(&mut errors, config);
    misc::validate_retry(&mut errors, config);
    misc::validate_http(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

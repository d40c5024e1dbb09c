//! Materia configuration.
//!
//! TOML file with serde defaults for every section, so a partial file (or
//! none at all) is a complete config. Secrets never live in the file: the
//! hosted backend only names the environment variable holding its token.
//!
//! ```rust,no_run
//! let config = materia_config::load_config(None)?;
//! println!("backend: {}", config.backend.kind);
//! # Ok::<(), materia_common::ConfigError>(())
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::MateriaConfig;

use std::path::Path;

use materia_common::ConfigError;

/// Load and validate the config.
///
/// An explicit `path` must exist. Without one the platform default is
/// used, and created from the commented template when missing.
pub fn load_config(path: Option<&Path>) -> Result<MateriaConfig, ConfigError> {
    let config = match path {
        Some(path) if !path.exists() => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

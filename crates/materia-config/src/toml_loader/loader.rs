use std::path::{Path, PathBuf};

use materia_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;
use crate::schema::MateriaConfig;

/// `<config dir>/materia/config.toml`, e.g. `~/.config/materia/config.toml`
/// on Linux. `None` when the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("materia").join("config.toml"))
}

/// Parse a TOML file. Missing fields take their defaults; values are not
/// validated here.
pub fn load_from_path(path: &Path) -> Result<MateriaConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| io_error("read", path, e))?;
    let config = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("{}: {e}", path.display()))
    })?;
    debug!("parsed config from {}", path.display());
    Ok(config)
}

/// Load the file at the default path, writing the commented template there
/// first if it does not exist yet.
pub fn load_default() -> Result<MateriaConfig, ConfigError> {
    let path = default_config_path()
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))?;

    if path.exists() {
        return load_from_path(&path);
    }
    write_default_config(&path)?;
    Ok(MateriaConfig::default())
}

/// Write the commented default template to `path`, creating parent dirs.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create directory for", path, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", path, e))?;
    info!("wrote default config to {}", path.display());
    Ok(())
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {err}", path.display()))
}

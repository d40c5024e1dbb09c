use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MateriaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("retry.max_attempts = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: retry.max_attempts = 0"
        );
    }

    #[test]
    fn materia_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: MateriaError = config_err.into();
        assert!(matches!(err, MateriaError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn materia_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MateriaError = io_err.into();
        assert!(matches!(err, MateriaError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn materia_error_other_variants() {
        let err = MateriaError::Backend("unknown backend kind".into());
        assert_eq!(err.to_string(), "backend error: unknown backend kind");

        let err = MateriaError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}

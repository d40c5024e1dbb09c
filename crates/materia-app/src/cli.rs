use std::path::PathBuf;

use clap::Parser;
use materia_config::schema::BackendKind;

/// Materia: a terminal chat client for language-model inference backends.
#[derive(Parser, Debug)]
#[command(name = "materia", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `materia=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Backend to use instead of the configured one (hosted, local, local-stream).
    #[arg(long)]
    pub backend: Option<BackendKind>,

    /// Submit one prompt, print the answer and exit.
    #[arg(short, long)]
    pub prompt: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_override() {
        let args = Args::try_parse_from(["materia", "--backend", "local-stream"]).unwrap();
        assert_eq!(args.backend, Some(BackendKind::LocalStream));
        assert!(args.prompt.is_none());
    }

    #[test]
    fn parses_one_shot_prompt() {
        let args = Args::try_parse_from(["materia", "-p", "hello there"]).unwrap();
        assert_eq!(args.prompt.as_deref(), Some("hello there"));
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Args::try_parse_from(["materia", "--backend", "cloud"]).is_err());
    }
}

mod backend;
mod cli;
mod repl;

use std::process::ExitCode;

use materia_config::schema::MateriaConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "materia=info";

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("Invalid log directive '{directive}', using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: cli::Args) -> materia_common::Result<()> {
    // Logging depends on the config, so config errors are reported after init.
    let loaded = materia_config::load_config(args.config.as_deref());
    let log_directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.as_directive().to_string(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&log_directive);

    tracing::info!("Materia v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        MateriaConfig::default()
    });
    if let Some(kind) = args.backend {
        config.backend.kind = kind;
    }

    let backend = backend::build(&config)?;
    let mut stdout = std::io::stdout();

    match args.prompt {
        Some(ref prompt) => repl::run_once(&backend, prompt, &mut stdout).await,
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            repl::run(&backend, stdin, &mut stdout).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args = cli::parse();
    match run(args).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("materia: {e}");
            ExitCode::FAILURE
        }
    }
}

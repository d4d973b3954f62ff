pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod errors;
pub mod models;
pub mod page;
pub mod render;
pub mod timeline;

use std::process::ExitCode;

use crate::cli::{CommandLine, Commands};
use crate::client::HttpPortfolioSource;
use crate::config::{AppConfig, ConfigOverrides};
use crate::errors::FolioResult;
use crate::models::ContactForm;
use crate::timeline::DurationFormatter;

/// Entry point used by the `folio` binary.
pub async fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load .env file if present (ignore error if not found)
    let _ = dotenvy::dotenv();

    let args = CommandLine::parse_args();
    match dispatch(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(args: &CommandLine) -> FolioResult<AppConfig> {
    let mut cfg = config::load_config(args.config.as_deref())?;
    cfg.apply_overrides(&ConfigOverrides::from_env(args.api_base.clone(), args.cutoff));
    Ok(cfg)
}

async fn dispatch(args: CommandLine) -> FolioResult<String> {
    if let Commands::InitConfig { path } = &args.command {
        return commands::init_config(path);
    }

    let cfg = resolve_config(&args)?;
    let source = HttpPortfolioSource::new(&cfg.api)?;
    let formatter = DurationFormatter::from_config(&cfg.timeline);
    tracing::debug!(
        base_url = source.base_url(),
        cutoff = %formatter.cutoff(),
        "backend configured"
    );

    match args.command {
        Commands::Show { json } => commands::show(&source, &formatter, json).await,
        Commands::Experiences { json } => commands::experiences(&source, &formatter, json).await,
        Commands::Contact {
            first_name,
            last_name,
            email,
            message,
        } => {
            let form = ContactForm {
                first_name,
                last_name,
                email,
                message,
            };
            commands::contact(&source, form).await
        }
        Commands::InitConfig { path } => commands::init_config(&path),
    }
}

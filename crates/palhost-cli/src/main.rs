//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, bootstraps a `CliContext` and
//! dispatches to a handler. Exit codes come from `CliError::exit_code`.

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use palhost_cli::handlers::find::FindTarget;
use palhost_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // No command provided - show help
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::with_defaults().with_base_dir(cli.base_dir))
        .context("Failed to resolve server layout")?;

    match command {
        Commands::Paths => handlers::paths::execute(&ctx),
        Commands::Status => {
            handlers::status::execute(&ctx, cli.json)?;
        }
        Commands::Find { name, pid } => {
            let target = FindTarget::from_args(name, pid)
                .context("either --name or --pid is required")?;
            handlers::find::execute(&ctx, &target, cli.json)?;
        }
        Commands::Stop { pid } => {
            handlers::stop::execute(&ctx, pid)?;
        }
        Commands::InstallSteamcmd { url, dest } => {
            handlers::install::execute(&ctx, url, dest).await?;
        }
        Commands::Log { message, console } => {
            handlers::log::execute(&ctx, &message, console.as_deref())?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load PALHOST_BASE_DIR and RUST_LOG from .env before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<CliError>())
                .map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

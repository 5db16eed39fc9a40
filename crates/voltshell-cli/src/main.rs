//! CLI entry point.
//!
//! Loads `.env`, parses flags into settings, bootstraps the runtime and
//! dispatches to a handler.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use voltshell_cli::error::exit_code_for;
use voltshell_cli::{Cli, Commands, handlers};
use voltshell_runtime::bootstrap;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = cli.settings();
    if matches!(command, Commands::Config) {
        return handlers::config::execute(&settings);
    }

    let ctx = bootstrap(settings)?;
    match command {
        Commands::Probe { url } => handlers::probe::execute(&ctx, url.clone()).await,
        Commands::Resolve { json } => handlers::resolve::execute(&ctx, *json).await,
        Commands::Run { events } => handlers::run::execute(&ctx, *events).await,
        Commands::Config => handlers::config::execute(&ctx.settings),
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = dispatch(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e));
    }
}

//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use ddevdesk_cli::{Cli, bootstrap, handlers, tool_config};

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so flag env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = tool_config(&cli)?;
    let backend = bootstrap(&config)?;

    if !handlers::execute(&backend, command).await? {
        std::process::exit(1);
    }
    Ok(())
}

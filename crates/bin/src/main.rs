use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = match &cli.command {
        Commands::Check(args) => commands::check::run(args, cli.format),
        Commands::Get(args) => commands::get::run(args, cli.format),
        Commands::List(args) => commands::list::run(args, cli.format),
        Commands::Set(args) => commands::set::run(args, cli.format),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with command output
fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("libconf=info".parse()?))
        .with_writer(std::io::stderr)
        .try_init()?;
    Ok(())
}

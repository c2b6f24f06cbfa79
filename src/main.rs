mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries hex and JSON output only.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Nonce => commands::nonce::run_nonce()?,
        Commands::Transcript(args) => commands::transcript::run_transcript(args)?,
        Commands::Open(args) => commands::open::run_open(args)?,
        Commands::Seal(args) => commands::seal::run_seal(args)?,
    }

    Ok(())
}

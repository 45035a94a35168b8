//! ccsync CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ccsync::cli::{Cli, Commands};
use ccsync::commands;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sync => commands::sync::cmd_sync(&cli.config, cli.json),
        Commands::Watch => commands::watch::cmd_watch(&cli.config, cli.json),
    };

    if let Err(err) = result {
        eprintln!("ccsync: {err}");
        std::process::exit(1);
    }
}

//! Command-line surface. Only `sync` and `watch` are implemented;
//! `init`, `find`, and `clear` are out of scope (spec Non-goals) and
//! their names are left unclaimed rather than reserved as stubs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ccsync", about = "Sync Lua programs onto ComputerCraft computers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the config file.
    #[arg(long, global = true, default_value = "ccsync.toml")]
    pub config: PathBuf,

    /// Emit NDJSON instead of human-readable output.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a single sync pass and exit.
    Sync,
    /// Watch the source tree and sync on every change.
    Watch,
}

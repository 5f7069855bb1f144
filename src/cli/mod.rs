// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the vault JSON file
    #[arg(long, global = true, env = "VAULT_FILE")]
    pub vault: Option<PathBuf>,

    /// Command to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

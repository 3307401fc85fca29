//! Application layer for the `skillet` CLI.
//!
//! Parses the command line, initializes logging, and dispatches to the
//! command handlers. The discovery, resolution, and update-check logic
//! lives in the `skillet-discovery`, `skillet-state`, and `skillet-update`
//! crates; this crate only wires them to the terminal.

#![deny(unsafe_code)]

pub mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

/// The main entry point for the `skillet` application.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List { skill_dirs, format } => commands::handle_list_command(skill_dirs, format),
        Commands::Resolve { name, format } => commands::handle_resolve_command(&name, format),
        Commands::Show { name } => commands::handle_show_command(&name),
        Commands::CheckUpdates { dir } => commands::handle_check_updates_command(dir),
    }
}

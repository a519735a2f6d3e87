//! Harbour toolchain CLI - locate and check the native GCC tool chain

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("harbour_toolchain=debug")
    } else {
        EnvFilter::new("harbour_toolchain=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let color = !cli.no_color && io::stderr().is_terminal();

    // Execute command
    match cli.command {
        Commands::Check(args) => commands::check::execute(args, color),
        Commands::Locate(args) => commands::locate::execute(args),
        Commands::Config(args) => commands::config::execute(args),
    }
}

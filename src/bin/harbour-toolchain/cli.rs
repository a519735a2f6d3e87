//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use harbour_toolchain::ToolRole;

/// Harbour toolchain - locate and check the native GCC tool chain
#[derive(Parser)]
#[command(name = "harbour-toolchain")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that every tool is present and the compiler version is usable
    Check(CheckArgs),

    /// Print the resolved executable for one tool
    Locate(LocateArgs),

    /// Print the effective tool chain configuration
    Config(ConfigArgs),
}

/// Options shared by every command that configures a tool chain.
#[derive(Args, Clone, Default)]
pub struct ToolchainOpts {
    /// Directory to search before PATH (may be repeated)
    #[arg(long = "path", value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// Use a different executable for a tool, e.g. `c-compiler=gcc-12`
    #[arg(long = "tool", value_name = "ROLE=NAME", value_parser = parse_tool_override)]
    pub tools: Vec<(ToolRole, String)>,

    /// Ignore the CC, CXX, AS and AR environment variables
    #[arg(long)]
    pub no_env: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub toolchain: ToolchainOpts,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct LocateArgs {
    /// Tool role (cpp-compiler, c-compiler, assembler, linker, static-lib-archiver)
    pub role: ToolRole,

    #[command(flatten)]
    pub toolchain: ToolchainOpts,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub toolchain: ToolchainOpts,
}

fn parse_tool_override(s: &str) -> Result<(ToolRole, String), String> {
    let (role, name) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ROLE=NAME, got `{}`", s))?;
    let role: ToolRole = role.trim().parse().map_err(|e| format!("{}", e))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("no executable given for {}", role));
    }
    Ok((role, name.to_string()))
}

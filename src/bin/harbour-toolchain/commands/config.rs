//! `harbour-toolchain config` command

use anyhow::Result;

use crate::cli::ConfigArgs;
use harbour_toolchain::util::config::ToolchainConfig;

use super::load_settings;

pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = ToolchainConfig {
        toolchain: load_settings(&args.toolchain)?,
    };
    if !config.toolchain.has_overrides() {
        tracing::info!("No tool chain overrides configured; default executables apply");
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

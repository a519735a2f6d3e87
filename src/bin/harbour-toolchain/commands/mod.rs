//! Command implementations

pub mod check;
pub mod config;
pub mod locate;

use anyhow::{Context, Result};

use crate::cli::ToolchainOpts;
use harbour_toolchain::util::config::{
    global_toolchain_config_path, load_toolchain_config, project_toolchain_config_path,
    ToolchainSettings,
};
use harbour_toolchain::GppToolChain;

/// Effective settings: config files, then environment, then command line.
pub fn load_settings(opts: &ToolchainOpts) -> Result<ToolchainSettings> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let global_path = global_toolchain_config_path();
    let config = load_toolchain_config(
        global_path.as_deref(),
        &project_toolchain_config_path(&cwd),
    );

    let mut settings = config.toolchain;
    if !opts.no_env {
        settings.apply_env(|key| std::env::var(key).ok());
    }
    for (role, name) in &opts.tools {
        settings.set_executable(*role, name.clone());
    }
    settings.path.extend(opts.paths.iter().cloned());

    Ok(settings)
}

/// A host tool chain configured from `opts`.
pub fn configured_toolchain(opts: &ToolchainOpts) -> Result<GppToolChain> {
    let settings = load_settings(opts)?;
    let mut toolchain = GppToolChain::host(settings.name());
    settings.apply(&mut toolchain);
    Ok(toolchain)
}

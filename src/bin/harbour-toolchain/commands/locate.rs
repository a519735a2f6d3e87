//! `harbour-toolchain locate` command

use anyhow::{bail, Result};

use crate::cli::LocateArgs;

use super::configured_toolchain;

pub fn execute(args: LocateArgs) -> Result<()> {
    let mut toolchain = configured_toolchain(&args.toolchain)?;

    match toolchain.locate(args.role) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => bail!(
            "{} `{}` cannot be found",
            args.role.display_name(),
            toolchain.executable(args.role)
        ),
    }
}

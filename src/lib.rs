//! Harbour toolchain - native tool chain discovery for the Harbour build system
//!
//! This crate locates the executables that make up a GCC-style tool chain,
//! reports whether the tool chain is usable, and hands out adapters for its
//! compilers, assembler, linker and archiver.

pub mod builder;
pub mod core;
pub mod util;

/// Test utilities and fakes for unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides a fake operating system and a canned version probe.
#[cfg(test)]
pub mod test_support;

pub use builder::toolchain::{
    Adapter, Availability, GppToolChain, GppVersionDeterminer, NativeTool, ToolRegistry,
    ToolchainError, UnavailableReason, VersionProbe,
};
pub use core::{HostOs, OperatingSystem, ToolRole};
pub use util::config::ToolchainSettings;

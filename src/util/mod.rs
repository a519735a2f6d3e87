//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod fs;
pub mod process;

pub use config::{ToolchainConfig, ToolchainSettings};
pub use diagnostic::Diagnostic;
pub use process::ProcessBuilder;

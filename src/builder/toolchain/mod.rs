//! Native tool chain discovery and tool adapters.
//!
//! A tool chain is a set of executables filling the five tool roles (C++
//! compiler, C compiler, assembler, linker, static library archiver).
//!
//! Discovery order for each role's executable:
//! 1. Directories added with `add_search_path_entry`, in insertion order
//! 2. The host's default `PATH`
//!
//! Availability is reported as a structured [`Availability`] verdict; the
//! adapter factories turn an unavailable verdict into a [`ToolchainError`].

mod adapter;
mod availability;
mod compiler;
mod error;
mod gcc;
mod linker;
mod registry;
mod tool;
mod version;

pub use adapter::{Adapter, NativeTool};
pub use availability::{Availability, UnavailableReason};
pub use compiler::{Assembler, CCompiler, CppCompiler};
pub use error::ToolchainError;
pub use gcc::GppToolChain;
pub use linker::{ArStaticLibArchiver, GppLinker, SonameStyle};
pub use registry::ToolRegistry;
pub use tool::{quote_option, write_options_file, CommandLineTool, OPTIONS_FILE_NAME};
pub use version::{
    derive_command_file_support, parse_version_output, GppVersionDeterminer, VersionProbe,
};

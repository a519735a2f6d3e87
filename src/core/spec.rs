//! Inputs consumed by the tool adapters.
//!
//! These describe *what* to compile, assemble, link or archive. The adapters
//! in `builder::toolchain` turn them into command lines.

use std::path::PathBuf;

/// Input for a C or C++ compile step.
#[derive(Debug, Clone, Default)]
pub struct CompileSpec {
    /// Source file to compile
    pub source: PathBuf,
    /// Output object file
    pub output: PathBuf,
    /// Include directories
    pub include_dirs: Vec<PathBuf>,
    /// Preprocessor defines (name, optional value)
    pub defines: Vec<(String, Option<String>)>,
    /// Additional compiler flags
    pub args: Vec<String>,
    /// Emit position independent code
    pub position_independent: bool,
    /// Scratch directory for options files
    pub temp_dir: PathBuf,
}

/// Input for an assemble step.
#[derive(Debug, Clone, Default)]
pub struct AssembleSpec {
    pub source: PathBuf,
    pub output: PathBuf,
    pub args: Vec<String>,
}

/// Link mode for executables and shared libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    #[default]
    Executable,
    SharedLib,
}

/// Input for a link step.
#[derive(Debug, Clone, Default)]
pub struct LinkSpec {
    /// Object files to link
    pub objects: Vec<PathBuf>,
    /// Output file (executable or shared library)
    pub output: PathBuf,
    pub mode: LinkMode,
    /// Library search paths
    pub lib_dirs: Vec<PathBuf>,
    /// Libraries to link (without -l prefix)
    pub libs: Vec<String>,
    /// Additional linker flags
    pub args: Vec<String>,
    /// Scratch directory for options files
    pub temp_dir: PathBuf,
}

/// Input for an archive step (creating static library).
#[derive(Debug, Clone, Default)]
pub struct ArchiveSpec {
    /// Object files to archive
    pub objects: Vec<PathBuf>,
    /// Output archive file
    pub output: PathBuf,
}

//! Core data types: tool roles, adapter inputs and the OS abstraction.

pub mod os;
pub mod spec;
pub mod tool;

pub use os::{HostOs, OperatingSystem};
pub use spec::{ArchiveSpec, AssembleSpec, CompileSpec, LinkMode, LinkSpec};
pub use tool::ToolRole;

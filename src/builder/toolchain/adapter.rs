//! Tool adapters handed out by a tool chain.

use std::process::Output;

use anyhow::{Context, Result};

use super::compiler::{Assembler, CCompiler, CppCompiler};
use super::linker::{ArStaticLibArchiver, GppLinker};
use super::tool::CommandLineTool;
use crate::core::tool::ToolRole;
use crate::util::process::ProcessBuilder;

/// Turns a spec into an invocation of a located tool.
pub trait NativeTool {
    /// What this tool consumes (compile spec, link spec, ...).
    type Spec;

    /// The located executable.
    fn tool(&self) -> &CommandLineTool;

    /// Build the command for `spec` without running it.
    fn command(&self, spec: &Self::Spec) -> Result<ProcessBuilder>;

    /// Run the tool for `spec`, requiring success.
    fn execute(&self, spec: &Self::Spec) -> Result<Output> {
        let cmd = self.command(spec)?;
        tracing::debug!("{}: {}", self.tool().name(), cmd.display_command());
        cmd.exec_and_check()
            .with_context(|| format!("{} failed", self.tool().name()))
    }
}

/// An adapter for one tool role.
#[derive(Debug, Clone)]
pub enum Adapter {
    CppCompiler(CppCompiler),
    CCompiler(CCompiler),
    Assembler(Assembler),
    Linker(GppLinker),
    StaticLibArchiver(ArStaticLibArchiver),
}

impl Adapter {
    pub fn role(&self) -> ToolRole {
        match self {
            Adapter::CppCompiler(_) => ToolRole::CppCompiler,
            Adapter::CCompiler(_) => ToolRole::CCompiler,
            Adapter::Assembler(_) => ToolRole::Assembler,
            Adapter::Linker(_) => ToolRole::Linker,
            Adapter::StaticLibArchiver(_) => ToolRole::StaticLibArchiver,
        }
    }

    pub fn tool(&self) -> &CommandLineTool {
        match self {
            Adapter::CppCompiler(a) => a.tool(),
            Adapter::CCompiler(a) => a.tool(),
            Adapter::Assembler(a) => a.tool(),
            Adapter::Linker(a) => a.tool(),
            Adapter::StaticLibArchiver(a) => a.tool(),
        }
    }

    /// The command-file capability, for adapters that take one.
    pub fn command_file_capable(&self) -> Option<bool> {
        match self {
            Adapter::CppCompiler(a) => Some(a.uses_command_file()),
            Adapter::CCompiler(a) => Some(a.uses_command_file()),
            Adapter::Linker(a) => Some(a.uses_command_file()),
            Adapter::Assembler(_) | Adapter::StaticLibArchiver(_) => None,
        }
    }
}

//! Tool roles a native tool chain has to fill.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// One of the fixed responsibilities of a GCC-style tool chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolRole {
    CppCompiler,
    CCompiler,
    Assembler,
    Linker,
    StaticLibArchiver,
}

impl ToolRole {
    /// All roles, in the order availability is reported.
    pub const ALL: [ToolRole; 5] = [
        ToolRole::CppCompiler,
        ToolRole::CCompiler,
        ToolRole::Assembler,
        ToolRole::Linker,
        ToolRole::StaticLibArchiver,
    ];

    /// Human-readable name used in availability reasons.
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolRole::CppCompiler => "C++ compiler",
            ToolRole::CCompiler => "C compiler",
            ToolRole::Assembler => "Assembler",
            ToolRole::Linker => "Linker",
            ToolRole::StaticLibArchiver => "Static library archiver",
        }
    }

    /// Executable base name used until the caller overrides it.
    pub fn default_executable(&self) -> &'static str {
        match self {
            ToolRole::CppCompiler => "g++",
            ToolRole::CCompiler => "gcc",
            ToolRole::Assembler => "as",
            ToolRole::Linker => "g++",
            ToolRole::StaticLibArchiver => "ar",
        }
    }

    /// Key used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolRole::CppCompiler => "cpp-compiler",
            ToolRole::CCompiler => "c-compiler",
            ToolRole::Assembler => "assembler",
            ToolRole::Linker => "linker",
            ToolRole::StaticLibArchiver => "static-lib-archiver",
        }
    }

    /// Whether adapters for this role honor the command-file capability.
    pub fn uses_command_files(&self) -> bool {
        match self {
            ToolRole::CppCompiler | ToolRole::CCompiler | ToolRole::Linker => true,
            ToolRole::Assembler | ToolRole::StaticLibArchiver => false,
        }
    }
}

impl fmt::Display for ToolRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpp-compiler" | "cppCompiler" | "cxx" => Ok(ToolRole::CppCompiler),
            "c-compiler" | "cCompiler" | "cc" => Ok(ToolRole::CCompiler),
            "assembler" | "as" => Ok(ToolRole::Assembler),
            "linker" | "ld" => Ok(ToolRole::Linker),
            "static-lib-archiver" | "staticLibArchiver" | "ar" => Ok(ToolRole::StaticLibArchiver),
            _ => bail!(
                "unknown tool `{}` (expected one of: {})",
                s,
                ToolRole::ALL.map(|r| r.as_str()).join(", ")
            ),
        }
    }
}

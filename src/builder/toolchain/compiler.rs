//! Compiler and assembler adapters for GCC.

use anyhow::Result;

use super::adapter::NativeTool;
use super::tool::{write_options_file, CommandLineTool};
use crate::core::spec::{AssembleSpec, CompileSpec};
use crate::util::process::ProcessBuilder;

/// Build a compile command, optionally moving options into an `@file`.
fn compile_command(
    tool: &CommandLineTool,
    language: &str,
    spec: &CompileSpec,
    use_command_file: bool,
) -> Result<ProcessBuilder> {
    let mut options = vec!["-x".to_string(), language.to_string(), "-c".to_string()];

    if spec.position_independent {
        options.push("-fPIC".to_string());
    }

    // Include directories
    for dir in &spec.include_dirs {
        options.push(format!("-I{}", dir.display()));
    }

    // Defines
    for (name, value) in &spec.defines {
        match value {
            Some(v) => options.push(format!("-D{}={}", name, v)),
            None => options.push(format!("-D{}", name)),
        }
    }

    options.extend(spec.args.iter().cloned());
    options.push("-o".to_string());
    options.push(spec.output.display().to_string());

    let cmd = tool.process()?;
    let cmd = if use_command_file {
        let file = write_options_file(&spec.temp_dir, &options)?;
        cmd.arg(format!("@{}", file.display()))
    } else {
        cmd.args(&options)
    };

    Ok(cmd.arg(&spec.source))
}

/// Compiles C++ sources with `g++`.
#[derive(Debug, Clone)]
pub struct CppCompiler {
    tool: CommandLineTool,
    use_command_file: bool,
}

impl CppCompiler {
    pub fn new(tool: CommandLineTool, use_command_file: bool) -> Self {
        CppCompiler {
            tool,
            use_command_file,
        }
    }

    pub fn uses_command_file(&self) -> bool {
        self.use_command_file
    }
}

impl NativeTool for CppCompiler {
    type Spec = CompileSpec;

    fn tool(&self) -> &CommandLineTool {
        &self.tool
    }

    fn command(&self, spec: &CompileSpec) -> Result<ProcessBuilder> {
        compile_command(&self.tool, "c++", spec, self.use_command_file)
    }
}

/// Compiles C sources with `gcc`.
#[derive(Debug, Clone)]
pub struct CCompiler {
    tool: CommandLineTool,
    use_command_file: bool,
}

impl CCompiler {
    pub fn new(tool: CommandLineTool, use_command_file: bool) -> Self {
        CCompiler {
            tool,
            use_command_file,
        }
    }

    pub fn uses_command_file(&self) -> bool {
        self.use_command_file
    }
}

impl NativeTool for CCompiler {
    type Spec = CompileSpec;

    fn tool(&self) -> &CommandLineTool {
        &self.tool
    }

    fn command(&self, spec: &CompileSpec) -> Result<ProcessBuilder> {
        compile_command(&self.tool, "c", spec, self.use_command_file)
    }
}

/// Assembles sources with `as`.
#[derive(Debug, Clone)]
pub struct Assembler {
    tool: CommandLineTool,
}

impl Assembler {
    pub fn new(tool: CommandLineTool) -> Self {
        Assembler { tool }
    }
}

impl NativeTool for Assembler {
    type Spec = AssembleSpec;

    fn tool(&self) -> &CommandLineTool {
        &self.tool
    }

    fn command(&self, spec: &AssembleSpec) -> Result<ProcessBuilder> {
        Ok(self
            .tool
            .process()?
            .args(&spec.args)
            .arg("-o")
            .arg(&spec.output)
            .arg(&spec.source))
    }
}

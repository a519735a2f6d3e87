//! Linker and static library archiver adapters for GCC.

use anyhow::Result;

use super::adapter::NativeTool;
use super::tool::{write_options_file, CommandLineTool};
use crate::core::os::OperatingSystem;
use crate::core::spec::{ArchiveSpec, LinkMode, LinkSpec};
use crate::util::process::ProcessBuilder;

/// How a shared library records its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SonameStyle {
    /// ELF `-Wl,-soname,<file>`
    #[default]
    Soname,
    /// Mach-O `-Wl,-install_name,@rpath/<file>`
    InstallName,
    /// PE/COFF has no equivalent
    Omit,
}

impl SonameStyle {
    pub fn for_os(os: &dyn OperatingSystem) -> Self {
        if os.is_windows_like() {
            SonameStyle::Omit
        } else if os.name() == "macos" {
            SonameStyle::InstallName
        } else {
            SonameStyle::Soname
        }
    }

    fn flag(self, file_name: &str) -> Option<String> {
        match self {
            SonameStyle::Soname => Some(format!("-Wl,-soname,{}", file_name)),
            SonameStyle::InstallName => Some(format!("-Wl,-install_name,@rpath/{}", file_name)),
            SonameStyle::Omit => None,
        }
    }
}

/// Links executables and shared libraries through the `g++` driver.
#[derive(Debug, Clone)]
pub struct GppLinker {
    tool: CommandLineTool,
    use_command_file: bool,
    soname_style: SonameStyle,
}

impl GppLinker {
    pub fn new(tool: CommandLineTool, use_command_file: bool) -> Self {
        GppLinker {
            tool,
            use_command_file,
            soname_style: SonameStyle::default(),
        }
    }

    pub fn with_soname_style(mut self, style: SonameStyle) -> Self {
        self.soname_style = style;
        self
    }

    pub fn uses_command_file(&self) -> bool {
        self.use_command_file
    }

    pub fn soname_style(&self) -> SonameStyle {
        self.soname_style
    }

    /// Options that do not depend on their position relative to the inputs.
    fn options(&self, spec: &LinkSpec) -> Vec<String> {
        let mut options = Vec::new();

        if spec.mode == LinkMode::SharedLib {
            options.push("-shared".to_string());
            let flag = spec
                .output
                .file_name()
                .and_then(|name| self.soname_style.flag(&name.to_string_lossy()));
            options.extend(flag);
        }

        options.push("-o".to_string());
        options.push(spec.output.display().to_string());

        // Library search paths
        for dir in &spec.lib_dirs {
            options.push(format!("-L{}", dir.display()));
        }

        options.extend(spec.args.iter().cloned());
        options
    }
}

impl NativeTool for GppLinker {
    type Spec = LinkSpec;

    fn tool(&self) -> &CommandLineTool {
        &self.tool
    }

    fn command(&self, spec: &LinkSpec) -> Result<ProcessBuilder> {
        let options = self.options(spec);
        let cmd = self.tool.process()?;
        let cmd = if self.use_command_file {
            let file = write_options_file(&spec.temp_dir, &options)?;
            cmd.arg(format!("@{}", file.display()))
        } else {
            cmd.args(&options)
        };

        // Libraries must follow the objects that reference them
        Ok(cmd
            .args(&spec.objects)
            .args(spec.libs.iter().map(|lib| format!("-l{}", lib))))
    }
}

/// Creates static libraries with `ar`.
#[derive(Debug, Clone)]
pub struct ArStaticLibArchiver {
    tool: CommandLineTool,
}

impl ArStaticLibArchiver {
    pub fn new(tool: CommandLineTool) -> Self {
        ArStaticLibArchiver { tool }
    }
}

impl NativeTool for ArStaticLibArchiver {
    type Spec = ArchiveSpec;

    fn tool(&self) -> &CommandLineTool {
        &self.tool
    }

    fn command(&self, spec: &ArchiveSpec) -> Result<ProcessBuilder> {
        // Create archive with symbol index, replace files
        Ok(self
            .tool
            .process()?
            .arg("rcs")
            .arg(&spec.output)
            .args(&spec.objects))
    }
}

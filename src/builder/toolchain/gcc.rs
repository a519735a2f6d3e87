//! GCC tool chain: discovery, version detection and adapter factories.

use std::path::PathBuf;
use std::sync::Arc;

use super::adapter::Adapter;
use super::availability::{Availability, AvailabilityBuilder, UnavailableReason};
use super::compiler::{Assembler, CCompiler, CppCompiler};
use super::error::ToolchainError;
use super::linker::{ArStaticLibArchiver, GppLinker, SonameStyle};
use super::registry::ToolRegistry;
use super::tool::CommandLineTool;
use super::version::{derive_command_file_support, GppVersionDeterminer, VersionProbe};
use crate::core::os::{HostOs, OperatingSystem};
use crate::core::tool::ToolRole;

/// A GNU G++ tool chain.
///
/// Every adapter factory re-checks availability. The compiler version is
/// determined by the first check that can find the C++ compiler and is then
/// kept, even if executable names or the search path change afterwards.
/// [`GppToolChain::force_recheck`] discards it explicitly.
pub struct GppToolChain {
    name: String,
    os: Arc<dyn OperatingSystem>,
    executables: ToolRegistry,
    version_probe: Box<dyn VersionProbe>,
    version: Option<String>,
    availability: Option<Availability>,
}

impl GppToolChain {
    /// Name of the tool chain registered by default.
    pub const DEFAULT_NAME: &'static str = "gcc";

    pub fn new(
        name: impl Into<String>,
        os: impl OperatingSystem + 'static,
        version_probe: impl VersionProbe + 'static,
    ) -> Self {
        let os: Arc<dyn OperatingSystem> = Arc::new(os);
        GppToolChain {
            name: name.into(),
            executables: ToolRegistry::new(Arc::clone(&os)),
            os,
            version_probe: Box::new(version_probe),
            version: None,
            availability: None,
        }
    }

    /// A tool chain for the current host that probes `g++ -v` for its version.
    pub fn host(name: impl Into<String>) -> Self {
        GppToolChain::new(name, HostOs::new(), GppVersionDeterminer::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &'static str {
        "GNU G++"
    }

    pub fn display_name(&self) -> String {
        format!("tool chain '{}' ({})", self.name, self.type_name())
    }

    /// Identifies binaries produced by this tool chain on this OS.
    pub fn output_type(&self) -> String {
        format!("{}-{}", self.name, self.os.name())
    }

    pub fn executable_name(&self, base: &str) -> String {
        self.os.executable_name(base)
    }

    pub fn shared_library_name(&self, base: &str) -> String {
        self.os.shared_library_name(base)
    }

    pub fn static_library_name(&self, base: &str) -> String {
        self.os.static_library_name(base)
    }

    /// The cached compiler version, if one has been determined.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The verdict of the most recent availability check.
    pub fn availability(&self) -> Option<&Availability> {
        self.availability.as_ref()
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn search_path(&self) -> &[PathBuf] {
        self.executables.search_path()
    }

    pub fn add_search_path_entry(&mut self, dir: impl Into<PathBuf>) {
        self.executables.add_search_path_entry(dir);
    }

    pub fn executable(&self, role: ToolRole) -> &str {
        self.executables.executable_name(role)
    }

    pub fn set_executable(&mut self, role: ToolRole, name: impl Into<String>) {
        self.executables.set_executable_name(role, name);
    }

    pub fn cpp_compiler_executable(&self) -> &str {
        self.executable(ToolRole::CppCompiler)
    }

    pub fn set_cpp_compiler(&mut self, name: impl Into<String>) {
        self.set_executable(ToolRole::CppCompiler, name);
    }

    pub fn c_compiler_executable(&self) -> &str {
        self.executable(ToolRole::CCompiler)
    }

    pub fn set_c_compiler(&mut self, name: impl Into<String>) {
        self.set_executable(ToolRole::CCompiler, name);
    }

    pub fn assembler_executable(&self) -> &str {
        self.executable(ToolRole::Assembler)
    }

    pub fn set_assembler(&mut self, name: impl Into<String>) {
        self.set_executable(ToolRole::Assembler, name);
    }

    pub fn linker_executable(&self) -> &str {
        self.executable(ToolRole::Linker)
    }

    pub fn set_linker(&mut self, name: impl Into<String>) {
        self.set_executable(ToolRole::Linker, name);
    }

    pub fn static_lib_archiver_executable(&self) -> &str {
        self.executable(ToolRole::StaticLibArchiver)
    }

    pub fn set_static_lib_archiver(&mut self, name: impl Into<String>) {
        self.set_executable(ToolRole::StaticLibArchiver, name);
    }

    /// Resolve the executable for one role.
    pub fn locate(&mut self, role: ToolRole) -> Option<PathBuf> {
        self.executables.locate(role)
    }

    // ------------------------------------------------------------------
    // Availability
    // ------------------------------------------------------------------

    /// Check that every tool can be found and the compiler version is known.
    pub fn check_availability(&mut self) -> Availability {
        let mut builder = AvailabilityBuilder::default();
        for role in ToolRole::ALL {
            builder.must_exist(role, self.executables.locate(role).as_ref());
        }

        if self.version.is_none() {
            self.determine_version();
        }
        if self.version.is_none() {
            builder.unavailable(UnavailableReason::VersionUndetermined);
        }

        let availability = builder.build();
        self.availability = Some(availability.clone());
        availability
    }

    /// Forget the cached version so the next check probes the compiler again.
    pub fn force_recheck(&mut self) {
        self.version = None;
        self.availability = None;
    }

    fn determine_version(&mut self) {
        self.version = self
            .executables
            .locate(ToolRole::CppCompiler)
            .and_then(|exe| self.version_probe.probe(&exe));
    }

    fn ensure_available(&mut self) -> Result<(), ToolchainError> {
        match self.check_availability() {
            Availability::Available => Ok(()),
            Availability::Unavailable(reasons) => Err(ToolchainError::Unavailable {
                toolchain: self.name.clone(),
                reasons,
            }),
        }
    }

    fn command_line_tool(&mut self, role: ToolRole) -> Result<CommandLineTool, ToolchainError> {
        let executable = self
            .executables
            .locate(role)
            .ok_or_else(|| ToolchainError::Unavailable {
                toolchain: self.name.clone(),
                reasons: vec![UnavailableReason::Missing { role }],
            })?;

        Ok(CommandLineTool::new(role.display_name(), executable)
            .with_search_path(self.executables.search_path()))
    }

    fn command_file_capable(&self) -> Result<bool, ToolchainError> {
        let version = self
            .version
            .as_deref()
            .ok_or_else(|| ToolchainError::Unavailable {
                toolchain: self.name.clone(),
                reasons: vec![UnavailableReason::VersionUndetermined],
            })?;
        derive_command_file_support(version)
    }

    // ------------------------------------------------------------------
    // Adapter factories
    // ------------------------------------------------------------------

    /// Create the adapter for `role`.
    pub fn create_adapter(&mut self, role: ToolRole) -> Result<Adapter, ToolchainError> {
        match role {
            ToolRole::CppCompiler => self.cpp_compiler().map(Adapter::CppCompiler),
            ToolRole::CCompiler => self.c_compiler().map(Adapter::CCompiler),
            ToolRole::Assembler => self.assembler().map(Adapter::Assembler),
            ToolRole::Linker => self.linker().map(Adapter::Linker),
            ToolRole::StaticLibArchiver => {
                self.static_library_archiver().map(Adapter::StaticLibArchiver)
            }
        }
    }

    pub fn cpp_compiler(&mut self) -> Result<CppCompiler, ToolchainError> {
        self.ensure_available()?;
        let tool = self.command_line_tool(ToolRole::CppCompiler)?;
        Ok(CppCompiler::new(tool, self.command_file_capable()?))
    }

    pub fn c_compiler(&mut self) -> Result<CCompiler, ToolchainError> {
        self.ensure_available()?;
        let tool = self.command_line_tool(ToolRole::CCompiler)?;
        Ok(CCompiler::new(tool, self.command_file_capable()?))
    }

    pub fn assembler(&mut self) -> Result<Assembler, ToolchainError> {
        self.ensure_available()?;
        let tool = self.command_line_tool(ToolRole::Assembler)?;
        Ok(Assembler::new(tool))
    }

    pub fn linker(&mut self) -> Result<GppLinker, ToolchainError> {
        self.ensure_available()?;
        let tool = self.command_line_tool(ToolRole::Linker)?;
        Ok(GppLinker::new(tool, self.command_file_capable()?)
            .with_soname_style(SonameStyle::for_os(self.os.as_ref())))
    }

    pub fn static_library_archiver(&mut self) -> Result<ArStaticLibArchiver, ToolchainError> {
        self.ensure_available()?;
        let tool = self.command_line_tool(ToolRole::StaticLibArchiver)?;
        Ok(ArStaticLibArchiver::new(tool))
    }
}

impl std::fmt::Debug for GppToolChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GppToolChain")
            .field("name", &self.name)
            .field("executables", &self.executables)
            .field("version", &self.version)
            .field("availability", &self.availability)
            .finish()
    }
}

//! Tool chain configuration.
//!
//! Tool chain settings are read from two locations:
//! - Global: `~/.harbour/toolchain.toml` - User-wide defaults
//! - Project: `.harbour/toolchain.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. The `CXX`, `CC`, `AS`
//! and `AR` environment variables take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::builder::toolchain::GppToolChain;
use crate::core::tool::ToolRole;
use crate::util::fs::read_to_string;

/// Contents of a `toolchain.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Toolchain settings
    pub toolchain: ToolchainSettings,
}

/// Executable names and search path for a GCC tool chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ToolchainSettings {
    /// Tool chain name (defaults to "gcc")
    pub name: Option<String>,

    /// C++ compiler executable (e.g., g++-12)
    pub cpp_compiler: Option<String>,

    /// C compiler executable (e.g., gcc-12)
    pub c_compiler: Option<String>,

    /// Assembler executable
    pub assembler: Option<String>,

    /// Linker driver executable
    pub linker: Option<String>,

    /// Static library archiver executable (e.g., gcc-ar)
    pub static_lib_archiver: Option<String>,

    /// Directories searched before PATH
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathBuf>,
}

impl ToolchainSettings {
    /// Configured executable for a role, if overridden.
    pub fn executable(&self, role: ToolRole) -> Option<&str> {
        let name = match role {
            ToolRole::CppCompiler => &self.cpp_compiler,
            ToolRole::CCompiler => &self.c_compiler,
            ToolRole::Assembler => &self.assembler,
            ToolRole::Linker => &self.linker,
            ToolRole::StaticLibArchiver => &self.static_lib_archiver,
        };
        name.as_deref()
    }

    /// Override the executable for a role.
    pub fn set_executable(&mut self, role: ToolRole, name: impl Into<String>) {
        let name = Some(name.into());
        match role {
            ToolRole::CppCompiler => self.cpp_compiler = name,
            ToolRole::CCompiler => self.c_compiler = name,
            ToolRole::Assembler => self.assembler = name,
            ToolRole::Linker => self.linker = name,
            ToolRole::StaticLibArchiver => self.static_lib_archiver = name,
        }
    }

    /// Tool chain name, falling back to the default.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(GppToolChain::DEFAULT_NAME)
    }

    /// Apply overrides from `CXX`, `CC`, `AS` and `AR`.
    ///
    /// `CXX` also drives linking, since the linker is the C++ driver.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        if let Some(cxx) = non_empty("CXX") {
            self.set_executable(ToolRole::CppCompiler, cxx.clone());
            self.set_executable(ToolRole::Linker, cxx);
        }
        if let Some(cc) = non_empty("CC") {
            self.set_executable(ToolRole::CCompiler, cc);
        }
        if let Some(assembler) = non_empty("AS") {
            self.set_executable(ToolRole::Assembler, assembler);
        }
        if let Some(ar) = non_empty("AR") {
            self.set_executable(ToolRole::StaticLibArchiver, ar);
        }
    }

    /// Configure a tool chain with these settings.
    pub fn apply(&self, toolchain: &mut GppToolChain) {
        for role in ToolRole::ALL {
            if let Some(name) = self.executable(role) {
                toolchain.set_executable(role, name);
            }
        }
        for dir in &self.path {
            toolchain.add_search_path_entry(dir.clone());
        }
    }

    /// Check if any settings are configured.
    pub fn has_overrides(&self) -> bool {
        self.name.is_some()
            || ToolRole::ALL.iter().any(|r| self.executable(*r).is_some())
            || !self.path.is_empty()
    }

    /// Merge other settings into these (other takes precedence).
    pub fn merge(&mut self, other: ToolchainSettings) {
        for role in ToolRole::ALL {
            if let Some(name) = other.executable(role) {
                self.set_executable(role, name);
            }
        }
        if other.name.is_some() {
            self.name = other.name;
        }
        if !other.path.is_empty() {
            self.path = other.path;
        }
    }
}

impl ToolchainConfig {
    /// Load toolchain configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse toolchain config: {}", path.display()))
    }

    /// Load toolchain configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to load toolchain config from {}: {:#}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize toolchain config")
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: ToolchainConfig) {
        self.toolchain.merge(other.toolchain);
    }
}

/// Load merged toolchain configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.harbour/toolchain.toml)
/// 2. Global config (~/.harbour/toolchain.toml)
/// 3. Defaults
pub fn load_toolchain_config(global_path: Option<&Path>, project_path: &Path) -> ToolchainConfig {
    let mut config = ToolchainConfig::default();

    // Load global config first
    if let Some(global_path) = global_path {
        if global_path.exists() {
            tracing::debug!("Loading toolchain config from {}", global_path.display());
            config.merge(ToolchainConfig::load_or_default(global_path));
        }
    }

    // Project config overrides global
    if project_path.exists() {
        tracing::debug!("Loading toolchain config from {}", project_path.display());
        config.merge(ToolchainConfig::load_or_default(project_path));
    }

    config
}

/// Get the global harbour config directory (~/.harbour).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".harbour"))
}

/// Get the global toolchain config path (~/.harbour/toolchain.toml).
pub fn global_toolchain_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("toolchain.toml"))
}

/// Get the project toolchain config path (.harbour/toolchain.toml).
pub fn project_toolchain_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".harbour").join("toolchain.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{touch_executable, touch_gcc_tools, FakeOs, StubProbe};
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_toolchain_config_default() {
        let config = ToolchainConfig::default();
        assert!(config.toolchain.cpp_compiler.is_none());
        assert!(config.toolchain.path.is_empty());
        assert_eq!(config.toolchain.name(), "gcc");
        assert!(!config.toolchain.has_overrides());
    }

    #[test]
    fn test_toolchain_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("toolchain.toml");

        std::fs::write(
            &config_path,
            r#"
[toolchain]
name = "cross"
cpp-compiler = "arm-none-eabi-g++"
c-compiler = "arm-none-eabi-gcc"
static-lib-archiver = "arm-none-eabi-ar"
path = ["/opt/arm/bin"]
"#,
        )
        .unwrap();

        let config = ToolchainConfig::load(&config_path).unwrap();
        let tc = &config.toolchain;
        assert_eq!(tc.name(), "cross");
        assert_eq!(tc.executable(ToolRole::CppCompiler), Some("arm-none-eabi-g++"));
        assert_eq!(tc.executable(ToolRole::CCompiler), Some("arm-none-eabi-gcc"));
        assert_eq!(tc.executable(ToolRole::Assembler), None);
        assert_eq!(
            tc.executable(ToolRole::StaticLibArchiver),
            Some("arm-none-eabi-ar")
        );
        assert_eq!(tc.path, vec![PathBuf::from("/opt/arm/bin")]);
        assert!(tc.has_overrides());
    }

    #[test]
    fn test_broken_config_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("toolchain.toml");
        std::fs::write(&config_path, "[toolchain\ncpp-compiler = ").unwrap();

        assert!(ToolchainConfig::load(&config_path).is_err());
        assert_eq!(
            ToolchainConfig::load_or_default(&config_path),
            ToolchainConfig::default()
        );
    }

    #[test]
    fn test_toolchain_config_merge() {
        let mut base = ToolchainConfig::default();
        base.toolchain.cpp_compiler = Some("g++".to_string());
        base.toolchain.static_lib_archiver = Some("ar".to_string());
        base.toolchain.path = vec![PathBuf::from("/usr/local/bin")];

        let mut override_cfg = ToolchainConfig::default();
        override_cfg.toolchain.cpp_compiler = Some("g++-12".to_string());
        override_cfg.toolchain.path = vec![PathBuf::from("/opt/gcc-12/bin")];

        base.merge(override_cfg);

        assert_eq!(base.toolchain.cpp_compiler.as_deref(), Some("g++-12"));
        assert_eq!(base.toolchain.static_lib_archiver.as_deref(), Some("ar"));
        // path is replaced, not appended
        assert_eq!(base.toolchain.path, vec![PathBuf::from("/opt/gcc-12/bin")]);
    }

    #[test]
    fn test_load_toolchain_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(
            &global_path,
            r#"
[toolchain]
cpp-compiler = "g++-11"
assembler = "as"
"#,
        )
        .unwrap();

        std::fs::write(
            &project_path,
            r#"
[toolchain]
cpp-compiler = "g++-12"
"#,
        )
        .unwrap();

        let config = load_toolchain_config(Some(&global_path), &project_path);
        assert_eq!(config.toolchain.cpp_compiler.as_deref(), Some("g++-12"));
        assert_eq!(config.toolchain.assembler.as_deref(), Some("as"));
    }

    #[test]
    fn test_apply_env() {
        let vars: HashMap<&str, &str> = [("CXX", "clang++"), ("AR", "llvm-ar"), ("CC", "  ")]
            .into_iter()
            .collect();

        let mut settings = ToolchainSettings::default();
        settings.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.executable(ToolRole::CppCompiler), Some("clang++"));
        assert_eq!(settings.executable(ToolRole::Linker), Some("clang++"));
        assert_eq!(settings.executable(ToolRole::StaticLibArchiver), Some("llvm-ar"));
        assert_eq!(settings.executable(ToolRole::CCompiler), None);
    }

    #[test]
    fn test_apply_configures_toolchain() {
        let tmp = TempDir::new().unwrap();
        touch_gcc_tools(tmp.path());
        let gcc_ar = touch_executable(tmp.path(), "gcc-ar");

        let mut settings = ToolchainSettings::default();
        settings.set_executable(ToolRole::StaticLibArchiver, "gcc-ar");
        settings.path = vec![tmp.path().to_path_buf()];

        let mut tc = GppToolChain::new(settings.name(), FakeOs::unix(), StubProbe::fixed("12.2.0"));
        settings.apply(&mut tc);

        assert_eq!(tc.static_lib_archiver_executable(), "gcc-ar");
        assert_eq!(tc.search_path(), &[tmp.path().to_path_buf()]);
        assert!(tc.check_availability().is_available());
        assert_eq!(tc.locate(ToolRole::StaticLibArchiver), Some(gcc_ar));
    }

    #[test]
    fn test_to_toml_renders_overrides() {
        let mut config = ToolchainConfig::default();
        config.toolchain.set_executable(ToolRole::CCompiler, "gcc-12");

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("c-compiler = \"gcc-12\""));
        assert!(!rendered.contains("path"));
    }

    #[test]
    fn test_project_config_path() {
        assert_eq!(
            project_toolchain_config_path(Path::new("/work/app")),
            PathBuf::from("/work/app/.harbour/toolchain.toml")
        );
    }
}

//! Executable names and locations for each tool role.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::os::OperatingSystem;
use crate::core::tool::ToolRole;

/// Maps tool roles to executable names and resolves them to files.
///
/// Resolutions are cached by executable name. A cached `None` means the name
/// was searched for and not found; it is not searched again until the search
/// path changes.
pub struct ToolRegistry {
    os: Arc<dyn OperatingSystem>,
    executable_names: HashMap<ToolRole, String>,
    resolved: HashMap<String, Option<PathBuf>>,
    search_path: Vec<PathBuf>,
}

impl ToolRegistry {
    /// Create a registry with the default GCC executable names.
    pub fn new(os: Arc<dyn OperatingSystem>) -> Self {
        let executable_names = ToolRole::ALL
            .iter()
            .map(|role| (*role, role.default_executable().to_string()))
            .collect();

        ToolRegistry {
            os,
            executable_names,
            resolved: HashMap::new(),
            search_path: Vec::new(),
        }
    }

    /// Directories searched before the host's default path.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Append a directory to the search path.
    ///
    /// The new directory may provide any name that previously failed to
    /// resolve, so every cached resolution is dropped.
    pub fn add_search_path_entry(&mut self, dir: impl Into<PathBuf>) {
        self.search_path.push(dir.into());
        self.resolved.clear();
    }

    pub fn executable_name(&self, role: ToolRole) -> &str {
        self.executable_names
            .get(&role)
            .map(String::as_str)
            .unwrap_or_else(|| role.default_executable())
    }

    /// Change the executable name used for a role.
    ///
    /// Resolutions are keyed by name, so nothing cached becomes wrong here.
    pub fn set_executable_name(&mut self, role: ToolRole, name: impl Into<String>) {
        self.executable_names.insert(role, name.into());
    }

    /// Resolve the executable for a role, consulting the cache first.
    pub fn locate(&mut self, role: ToolRole) -> Option<PathBuf> {
        let name = self.executable_name(role).to_string();
        if let Some(cached) = self.resolved.get(&name) {
            return cached.clone();
        }

        let found = self.find_executable(&name);
        self.resolved.insert(name, found.clone());
        found
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        candidate_names(name, self.os.is_windows_like())
            .iter()
            .find_map(|candidate| self.find_in_path(candidate))
    }

    fn find_in_path(&self, name: &str) -> Option<PathBuf> {
        let file_name = self.os.executable_name(name);
        self.search_path
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| is_file(candidate))
            .or_else(|| self.os.find_in_path(name))
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("os", &self.os.name())
            .field("executable_names", &self.executable_names)
            .field("resolved", &self.resolved)
            .field("search_path", &self.search_path)
            .finish()
    }
}

/// Names to try for an executable, most preferred first.
///
/// Under Cygwin `gcc`/`g++` is a symlink to a `-4` or `-3` binary that cannot
/// be run directly from a native process.
fn candidate_names(name: &str, windows_like: bool) -> Vec<String> {
    if windows_like {
        vec![format!("{}-4", name), format!("{}-3", name), name.to_string()]
    } else {
        vec![name.to_string()]
    }
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

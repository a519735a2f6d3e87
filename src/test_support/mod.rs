//! Test utilities and fakes for unit tests.
//!
//! Discovery has to be tested without touching the real `PATH` or running a
//! real compiler, so these fakes stand in for the OS abstraction and the
//! version probe.
//!
//! # Example
//!
//! ```rust,ignore
//! let tmp = TempDir::new().unwrap();
//! touch_executable(tmp.path(), "g++");
//!
//! let mut tc = GppToolChain::new("gcc", FakeOs::unix(), StubProbe::fixed("4.9.0"));
//! tc.add_search_path_entry(tmp.path());
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::builder::toolchain::VersionProbe;
use crate::core::os::OperatingSystem;

/// Fake operating system with a controllable default path.
#[derive(Debug, Clone, Default)]
pub struct FakeOs {
    windows: bool,
    default_path: Vec<PathBuf>,
}

impl FakeOs {
    /// A Unix-like host whose default path is empty.
    pub fn unix() -> Self {
        FakeOs {
            windows: false,
            default_path: Vec::new(),
        }
    }

    /// A Windows-like host whose default path is empty.
    pub fn windows() -> Self {
        FakeOs {
            windows: true,
            default_path: Vec::new(),
        }
    }

    /// Add a directory to the fake default path.
    pub fn with_default_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_path.push(dir.into());
        self
    }
}

impl OperatingSystem for FakeOs {
    fn name(&self) -> &str {
        if self.windows {
            "windows"
        } else {
            "linux"
        }
    }

    fn is_windows_like(&self) -> bool {
        self.windows
    }

    fn executable_name(&self, base: &str) -> String {
        if self.windows {
            format!("{}.exe", base)
        } else {
            base.to_string()
        }
    }

    fn find_in_path(&self, name: &str) -> Option<PathBuf> {
        let file_name = self.executable_name(name);
        self.default_path
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file())
    }
}

/// Version probe returning canned answers and counting invocations.
#[derive(Debug, Clone, Default)]
pub struct StubProbe {
    default: Option<String>,
    by_file_name: HashMap<String, String>,
    calls: Arc<AtomicUsize>,
}

impl StubProbe {
    /// Report `version` for every executable.
    pub fn fixed(version: &str) -> Self {
        StubProbe {
            default: Some(version.to_string()),
            ..Default::default()
        }
    }

    /// Never report a version.
    pub fn none() -> Self {
        StubProbe::default()
    }

    /// Report `version` for executables with this file name.
    pub fn with_version_for(mut self, file_name: &str, version: &str) -> Self {
        self.by_file_name
            .insert(file_name.to_string(), version.to_string());
        self
    }

    /// Number of times `probe` was called, across all clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VersionProbe for StubProbe {
    fn probe(&self, executable: &Path) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        executable
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| self.by_file_name.get(n).cloned())
            .or_else(|| self.default.clone())
    }
}

/// Create an (empty) executable file in `dir`.
pub fn touch_executable(dir: &Path, name: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, b"").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}

/// Create the five default GCC tools in `dir`.
pub fn touch_gcc_tools(dir: &Path) {
    for name in ["g++", "gcc", "as", "ar"] {
        touch_executable(dir, name);
    }
}

//! Operating system abstraction used for executable discovery.

use std::path::PathBuf;

/// Platform-specific naming and default executable lookup.
pub trait OperatingSystem: Send + Sync {
    /// Short OS name (e.g., "linux", "windows").
    fn name(&self) -> &str;

    /// Whether this host uses Windows conventions.
    ///
    /// GCC installed through Cygwin exposes `g++` as a symlink to `g++-3` or
    /// `g++-4`, so discovery tries the suffixed names first on these hosts.
    fn is_windows_like(&self) -> bool;

    /// Format an executable base name for this platform (`gcc` -> `gcc.exe`).
    fn executable_name(&self, base: &str) -> String;

    /// Look up an executable in the host's default search path.
    fn find_in_path(&self, name: &str) -> Option<PathBuf>;

    /// File name of a shared library built from `base`.
    fn shared_library_name(&self, base: &str) -> String {
        if self.is_windows_like() {
            format!("{}.dll", base)
        } else {
            format!("lib{}.so", base)
        }
    }

    /// File name of a static library built from `base`.
    fn static_library_name(&self, base: &str) -> String {
        if self.is_windows_like() {
            format!("{}.lib", base)
        } else {
            format!("lib{}.a", base)
        }
    }
}

/// The operating system this process runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostOs;

impl HostOs {
    pub fn new() -> Self {
        HostOs
    }
}

impl OperatingSystem for HostOs {
    fn name(&self) -> &str {
        std::env::consts::OS
    }

    fn is_windows_like(&self) -> bool {
        cfg!(windows)
    }

    fn executable_name(&self, base: &str) -> String {
        if self.is_windows_like() && !base.to_ascii_lowercase().ends_with(".exe") {
            format!("{}.exe", base)
        } else {
            base.to_string()
        }
    }

    fn find_in_path(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn shared_library_name(&self, base: &str) -> String {
        if cfg!(windows) {
            format!("{}.dll", base)
        } else if cfg!(target_os = "macos") {
            format!("lib{}.dylib", base)
        } else {
            format!("lib{}.so", base)
        }
    }
}

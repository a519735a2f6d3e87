//! Compiler version detection and version-gated capabilities.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::error::ToolchainError;
use crate::util::process::ProcessBuilder;

/// Determines the version of a compiler executable.
pub trait VersionProbe: Send + Sync {
    /// Return the version reported by `executable`, or `None` if it cannot be
    /// determined. Must not fail for missing or non-executable files.
    fn probe(&self, executable: &Path) -> Option<String>;
}

/// Reads the version from the output of `g++ -v`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GppVersionDeterminer;

impl GppVersionDeterminer {
    pub fn new() -> Self {
        GppVersionDeterminer
    }
}

impl VersionProbe for GppVersionDeterminer {
    fn probe(&self, executable: &Path) -> Option<String> {
        if !executable.is_file() {
            tracing::debug!("{} does not exist", executable.display());
            return None;
        }

        let output = match ProcessBuilder::new(executable).arg("-v").exec() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Failed to run {}: {:#}", executable.display(), e);
                return None;
            }
        };

        // gcc prints its configuration to stderr
        let mut text = String::from_utf8_lossy(&output.stderr).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stdout));

        let version = parse_version_output(&text);
        match &version {
            Some(v) => tracing::debug!("{} reports version {}", executable.display(), v),
            None => tracing::debug!(
                "No version found in output of `{} -v`",
                executable.display()
            ),
        }
        version
    }
}

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:gcc|clang) version (\S+)").unwrap());

/// Extract the version number from `gcc -v` (or `clang -v`) output.
pub fn parse_version_output(output: &str) -> Option<String> {
    VERSION_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whether a g++ of this version accepts `@file` option files.
///
/// Support arrived in GCC 4. A major component that is not a number is a
/// configuration error rather than "unsupported".
pub fn derive_command_file_support(version: &str) -> Result<bool, ToolchainError> {
    let major = version.split('.').next().unwrap_or_default();
    let major: u32 = major.parse().map_err(|_| ToolchainError::InvalidVersion {
        version: version.to_string(),
    })?;
    Ok(major >= 4)
}

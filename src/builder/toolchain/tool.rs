//! Proxy for a located command-line tool.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::{Context, Result};

use crate::util::fs::write_string;
use crate::util::process::ProcessBuilder;

/// File name used for `@file` option files.
pub const OPTIONS_FILE_NAME: &str = "options.txt";

/// A resolved executable plus the directories it should run with on `PATH`.
#[derive(Debug, Clone)]
pub struct CommandLineTool {
    name: String,
    executable: PathBuf,
    search_path: Vec<PathBuf>,
}

impl CommandLineTool {
    /// Create a proxy for `executable`, described as `name` in errors.
    pub fn new(name: impl Into<String>, executable: impl Into<PathBuf>) -> Self {
        CommandLineTool {
            name: name.into(),
            executable: executable.into(),
            search_path: Vec::new(),
        }
    }

    /// Directories prepended to `PATH` when the tool runs.
    ///
    /// `g++` finds `as` and `ld` through `PATH`, so they have to see the same
    /// directories discovery used.
    pub fn with_search_path(mut self, dirs: &[PathBuf]) -> Self {
        self.search_path = dirs.to_vec();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// A process builder for this tool with `PATH` set up.
    pub fn process(&self) -> Result<ProcessBuilder> {
        ProcessBuilder::new(&self.executable).prepend_path(&self.search_path)
    }

    /// Run the tool with `args`, requiring success.
    pub fn execute(&self, args: &[String]) -> Result<Output> {
        self.process()?
            .args(args)
            .exec_and_check()
            .with_context(|| format!("{} failed", self.name))
    }
}

/// Write `options` to an option file in `dir` and return its path.
///
/// Each option goes on its own line, quoted when GCC would otherwise split it.
pub fn write_options_file(dir: &Path, options: &[String]) -> Result<PathBuf> {
    let path = dir.join(OPTIONS_FILE_NAME);
    let mut contents = String::new();
    for option in options {
        contents.push_str(&quote_option(option));
        contents.push('\n');
    }
    write_string(&path, &contents)?;
    Ok(path)
}

/// Quote an option for a GCC `@file`.
pub fn quote_option(option: &str) -> String {
    let needs_quotes = option.is_empty()
        || option
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\'));
    if !needs_quotes {
        return option.to_string();
    }

    let mut quoted = String::with_capacity(option.len() + 2);
    quoted.push('"');
    for c in option.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

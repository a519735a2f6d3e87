//! CLI integration tests for harbour-toolchain.
//!
//! These tests run the binary against fake tools written as shell scripts,
//! with `PATH` and `HOME` pointed at empty directories so the host's real
//! compilers and config files are never seen.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// A scratch area with an isolated home, project and default path.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        for dir in ["home", "project", "empty-path", "tools"] {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        Sandbox { root }
    }

    fn dir(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    fn tools(&self) -> PathBuf {
        self.dir("tools")
    }

    /// Get the harbour-toolchain binary command, isolated from the host.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("harbour-toolchain").unwrap();
        cmd.current_dir(self.dir("project"))
            .env("HOME", self.dir("home"))
            .env("PATH", self.dir("empty-path"))
            .env_remove("CC")
            .env_remove("CXX")
            .env_remove("AS")
            .env_remove("AR");
        cmd
    }
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Install fake gcc tools reporting `version`.
fn install_gcc(dir: &Path, version: &str) {
    write_script(
        dir,
        "g++",
        &format!("echo 'gcc version {} (fake)' >&2", version),
    );
    for name in ["gcc", "as", "ar"] {
        write_script(dir, name, "exit 0");
    }
}

// ============================================================================
// harbour-toolchain check
// ============================================================================

#[test]
fn test_check_available_toolchain() {
    let sandbox = Sandbox::new();
    install_gcc(&sandbox.tools(), "4.9.0");

    sandbox
        .cmd()
        .arg("check")
        .arg("--path")
        .arg(sandbox.tools())
        .assert()
        .success()
        .stdout(predicate::str::contains("Tool chain 'gcc' (GNU G++)"))
        .stdout(predicate::str::contains("Version:       4.9.0"))
        .stdout(predicate::str::contains("Command files: supported"))
        .stdout(predicate::str::contains("Status: available"));
}

#[test]
fn test_check_reports_missing_archiver() {
    let sandbox = Sandbox::new();
    install_gcc(&sandbox.tools(), "4.9.0");
    fs::remove_file(sandbox.tools().join("ar")).unwrap();

    sandbox
        .cmd()
        .arg("check")
        .arg("--path")
        .arg(sandbox.tools())
        .arg("--no-color")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Status: not available"))
        .stderr(predicate::str::contains(
            "Static library archiver cannot be found",
        ))
        .stderr(predicate::str::contains("C compiler cannot be found").not());
}

#[test]
fn test_check_json_report() {
    let sandbox = Sandbox::new();
    install_gcc(&sandbox.tools(), "4.9.0");
    fs::remove_file(sandbox.tools().join("as")).unwrap();

    let output = sandbox
        .cmd()
        .arg("check")
        .arg("--json")
        .arg("--path")
        .arg(sandbox.tools())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["toolchain"], "gcc");
    assert_eq!(report["available"], false);
    assert_eq!(report["version"], "4.9.0");
    assert_eq!(report["command_files"], true);
    assert_eq!(
        report["reasons"],
        serde_json::json!([{ "kind": "missing", "role": "assembler" }])
    );
    assert_eq!(report["tools"].as_array().unwrap().len(), 5);
}

#[test]
fn test_check_old_compiler_warns() {
    let sandbox = Sandbox::new();
    install_gcc(&sandbox.tools(), "3.4.6");

    sandbox
        .cmd()
        .arg("check")
        .arg("--no-color")
        .arg("--path")
        .arg(sandbox.tools())
        .assert()
        .success()
        .stdout(predicate::str::contains("Command files: not supported"))
        .stderr(predicate::str::contains("warning: g++ 3.4.6"));
}

#[test]
fn test_check_unparsable_version_fails() {
    let sandbox = Sandbox::new();
    install_gcc(&sandbox.tools(), "snapshot.1");

    sandbox
        .cmd()
        .arg("check")
        .arg("--no-color")
        .arg("--path")
        .arg(sandbox.tools())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unable to determine major g++ version from version number `snapshot.1`",
        ));
}

#[test]
fn test_check_json_reports_unparsable_version() {
    let sandbox = Sandbox::new();
    install_gcc(&sandbox.tools(), "snapshot.1");

    let output = sandbox
        .cmd()
        .arg("check")
        .arg("--json")
        .arg("--path")
        .arg(sandbox.tools())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["available"], true);
    assert_eq!(report["version"], "snapshot.1");
    assert_eq!(report["command_files"], serde_json::Value::Null);
    assert!(report["error"]
        .as_str()
        .unwrap()
        .contains("unable to determine major g++ version"));
}

#[test]
fn test_check_piped_stderr_is_plain() {
    let sandbox = Sandbox::new();

    let output = sandbox.cmd().arg("check").output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: tool chain 'gcc' is not available"));
    assert!(!stderr.contains("\x1b["));
}

#[test]
fn test_check_honors_cxx_env() {
    let sandbox = Sandbox::new();
    install_gcc(&sandbox.tools(), "4.9.0");
    write_script(
        &sandbox.tools(),
        "g++-12",
        "echo 'gcc version 12.2.0 (fake)' >&2",
    );

    sandbox
        .cmd()
        .env("CXX", "g++-12")
        .arg("check")
        .arg("--path")
        .arg(sandbox.tools())
        .assert()
        .success()
        .stdout(predicate::str::contains("Version:       12.2.0"));
}

#[test]
fn test_check_reads_project_config() {
    let sandbox = Sandbox::new();
    install_gcc(&sandbox.tools(), "4.9.0");

    let config_dir = sandbox.dir("project").join(".harbour");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("toolchain.toml"),
        format!(
            "[toolchain]\nname = \"host-gcc\"\npath = [\"{}\"]\n",
            sandbox.tools().display()
        ),
    )
    .unwrap();

    sandbox
        .cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tool chain 'host-gcc' (GNU G++)"));
}

// ============================================================================
// harbour-toolchain locate
// ============================================================================

#[test]
fn test_locate_tool_override() {
    let sandbox = Sandbox::new();
    let gcc12 = write_script(&sandbox.tools(), "gcc-12", "exit 0");

    sandbox
        .cmd()
        .args(["locate", "c-compiler", "--tool", "c-compiler=gcc-12"])
        .arg("--path")
        .arg(sandbox.tools())
        .assert()
        .success()
        .stdout(predicate::str::contains(gcc12.display().to_string()));
}

#[test]
fn test_locate_missing_tool() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["locate", "assembler"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Assembler `as` cannot be found"));
}

#[test]
fn test_locate_rejects_unknown_role() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["locate", "fortran-compiler"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool"));
}

// ============================================================================
// harbour-toolchain config
// ============================================================================

#[test]
fn test_config_merges_sources() {
    let sandbox = Sandbox::new();

    let global_dir = sandbox.dir("home").join(".harbour");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("toolchain.toml"),
        "[toolchain]\nassembler = \"gas\"\nc-compiler = \"gcc-11\"\n",
    )
    .unwrap();

    let project_dir = sandbox.dir("project").join(".harbour");
    fs::create_dir_all(&project_dir).unwrap();
    fs::write(
        project_dir.join("toolchain.toml"),
        "[toolchain]\nc-compiler = \"gcc-12\"\n",
    )
    .unwrap();

    sandbox
        .cmd()
        .env("AR", "llvm-ar")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("assembler = \"gas\""))
        .stdout(predicate::str::contains("c-compiler = \"gcc-12\""))
        .stdout(predicate::str::contains("static-lib-archiver = \"llvm-ar\""));
}

#[test]
fn test_config_no_env() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .env("AR", "llvm-ar")
        .args(["config", "--no-env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("llvm-ar").not())
        .stderr(predicate::str::contains("No tool chain overrides configured"));
}

//! `harbour-toolchain check` command

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::cli::CheckArgs;
use harbour_toolchain::builder::toolchain::derive_command_file_support;
use harbour_toolchain::util::diagnostic::{emit, Diagnostic};
use harbour_toolchain::{Availability, GppToolChain, ToolRole, ToolchainError, UnavailableReason};

use super::configured_toolchain;

#[derive(Debug, Serialize)]
struct ToolReport {
    role: ToolRole,
    name: &'static str,
    executable: String,
    location: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    toolchain: String,
    display_name: String,
    available: bool,
    version: Option<String>,
    command_files: Option<bool>,
    search_path: Vec<PathBuf>,
    tools: Vec<ToolReport>,
    reasons: Vec<UnavailableReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn execute(args: CheckArgs, color: bool) -> Result<()> {
    let mut toolchain = configured_toolchain(&args.toolchain)?;
    tracing::debug!("Checking {}", toolchain.display_name());

    let availability = toolchain.check_availability();
    for reason in availability.reasons() {
        tracing::debug!("{}: {}", toolchain.name(), reason);
    }

    // A version that exists but cannot be interpreted is a configuration error
    let (command_files, config_error) =
        match toolchain.version().map(derive_command_file_support) {
            Some(Ok(supported)) => (Some(supported), None),
            Some(Err(e)) => (None, Some(e)),
            None => (None, None),
        };

    let report = build_report(
        &mut toolchain,
        &availability,
        command_files,
        config_error.as_ref(),
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(e) = config_error {
        if !args.json {
            emit(&e.to_diagnostic(), color);
        }
        std::process::exit(1);
    }

    match availability {
        Availability::Available => {
            if command_files == Some(false) {
                let warning = Diagnostic::warning(format!(
                    "g++ {} does not support option files; long command lines may fail",
                    report.version.as_deref().unwrap_or_default()
                ));
                emit(&warning, color);
            }
            Ok(())
        }
        Availability::Unavailable(reasons) => {
            if !args.json {
                let err = ToolchainError::Unavailable {
                    toolchain: toolchain.name().to_string(),
                    reasons,
                };
                emit(&err.to_diagnostic(), color);
            }
            std::process::exit(1);
        }
    }
}

fn build_report(
    toolchain: &mut GppToolChain,
    availability: &Availability,
    command_files: Option<bool>,
    config_error: Option<&ToolchainError>,
) -> CheckReport {
    let tools = ToolRole::ALL
        .iter()
        .map(|role| ToolReport {
            role: *role,
            name: role.display_name(),
            executable: toolchain.executable(*role).to_string(),
            location: toolchain.locate(*role),
        })
        .collect();

    CheckReport {
        toolchain: toolchain.name().to_string(),
        display_name: toolchain.display_name(),
        available: availability.is_available(),
        version: toolchain.version().map(str::to_string),
        command_files,
        search_path: toolchain.search_path().to_vec(),
        tools,
        reasons: availability.reasons().to_vec(),
        error: config_error.map(ToString::to_string),
    }
}

fn print_report(report: &CheckReport) {
    println!("{}", capitalize(&report.display_name));
    println!();

    for tool in &report.tools {
        let location = match &tool.location {
            Some(path) => path.display().to_string(),
            None => "not found".to_string(),
        };
        println!("  {:<25} {:<12} {}", tool.name, tool.executable, location);
    }

    println!();
    println!(
        "  Version:       {}",
        report.version.as_deref().unwrap_or("unknown")
    );
    let command_files = match report.command_files {
        Some(true) => "supported",
        Some(false) => "not supported",
        None => "unknown",
    };
    println!("  Command files: {}", command_files);

    if !report.search_path.is_empty() {
        println!("  Search path:");
        for dir in &report.search_path {
            println!("    {}", dir.display());
        }
    }

    println!();
    if report.available {
        println!("Status: available");
    } else {
        println!("Status: not available");
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Tool chain error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use super::availability::UnavailableReason;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error raised when a tool chain cannot produce an adapter.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ToolchainError {
    /// One or more tools are missing, or the version is unknown.
    #[error("tool chain '{toolchain}' is not available")]
    #[diagnostic(
        code(harbour::toolchain::unavailable),
        help("Install the missing tools or add their directory with `--path`")
    )]
    Unavailable {
        toolchain: String,
        reasons: Vec<UnavailableReason>,
    },

    /// The compiler reported a version whose major component is not a number.
    #[error("unable to determine major g++ version from version number `{version}`")]
    #[diagnostic(code(harbour::toolchain::invalid_version))]
    InvalidVersion { version: String },
}

impl ToolchainError {
    /// Reasons carried by an unavailability error.
    pub fn reasons(&self) -> &[UnavailableReason] {
        match self {
            ToolchainError::Unavailable { reasons, .. } => reasons,
            ToolchainError::InvalidVersion { .. } => &[],
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ToolchainError::Unavailable { reasons, .. } => {
                let mut diag = Diagnostic::error(self.to_string());
                for reason in reasons {
                    diag = diag.with_context(reason.to_string());
                }
                diag.with_suggestion(suggestions::ADD_SEARCH_PATH)
                    .with_suggestion(suggestions::OVERRIDE_TOOL)
            }
            ToolchainError::InvalidVersion { .. } => Diagnostic::error(self.to_string())
                .with_suggestion(suggestions::CHECK_COMPILER_VERSION),
        }
    }
}

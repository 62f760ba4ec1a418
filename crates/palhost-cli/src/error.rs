//! CLI-specific error types and exit codes.

use palhost_core::{PathError, ProcessError};
use palhost_runtime::{ActivityLogError, FetchError};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The server layout could not be resolved.
    #[error(transparent)]
    Paths(#[from] PathError),

    /// Process lookup or termination failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Download failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The activity log could not be written.
    #[error(transparent)]
    ActivityLog(#[from] ActivityLogError),

    /// A lookup result could not be rendered as JSON.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General error (process not found)
    /// - 69: `EX_UNAVAILABLE` (network)
    /// - 70: `EX_SOFTWARE` (output encoding)
    /// - 71: `EX_OSERR` (termination refused)
    /// - 74: `EX_IOERR` (files)
    /// - 77: `EX_NOPERM`
    /// - 78: `EX_CONFIG` (layout)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Paths(_) => 78,
            Self::Process(ProcessError::NotFound(_)) => 1,
            Self::Process(ProcessError::PermissionDenied { .. }) => 77,
            Self::Process(_) => 71,
            Self::Fetch(e) if e.is_network() => 69,
            Self::Fetch(FetchError::InvalidUrl { .. }) => 2,
            Self::Json(_) => 70,
            Self::Fetch(_) | Self::ActivityLog(_) | Self::Io(_) => 74,
        }
    }
}

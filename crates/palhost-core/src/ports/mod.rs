//! Port definitions (trait abstractions) for external systems.
//!
//! Ports describe what palhost needs from the outside world without naming
//! an implementation:
//! - `ConsoleSink` - where structured console entries go (GUI event bus, tracing, nothing)
//! - `ProcessTable` - how the host process table is enumerated
//!
//! Adapters live in `palhost-runtime` and in the CLI composition root.

mod console_sink;
mod process_table;

pub use console_sink::{
    ADD_CONSOLE_ENTRY, ConsoleSink, NoopConsoleSink, SERVER_CONSOLE, STEAM_CMD_CONSOLE,
};
pub use process_table::ProcessTable;

#[cfg(any(test, feature = "test-utils"))]
pub use console_sink::MockConsoleSink;
#[cfg(any(test, feature = "test-utils"))]
pub use process_table::MockProcessTable;

use thiserror::Error;

/// Errors from locating or terminating a host process.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// No process matched the lookup, or the pid is not running.
    #[error("Process not found: {0}")]
    NotFound(String),

    /// The process table could not be read.
    #[error("Failed to enumerate processes: {0}")]
    Enumeration(String),

    /// The caller may not signal this process.
    #[error("Permission denied terminating process {pid}")]
    PermissionDenied { pid: u32 },

    /// Any other OS-level failure.
    #[error("Failed to terminate process {pid}: {reason}")]
    Os { pid: u32, reason: String },
}

impl ProcessError {
    /// Lookup miss for a name substring.
    pub fn name_not_found(name: &str) -> Self {
        Self::NotFound(format!("no process with name containing '{name}'"))
    }

    /// Lookup miss for a pid.
    pub fn pid_not_found(pid: u32) -> Self {
        Self::NotFound(format!("no process with pid {pid}"))
    }

    /// `true` for the expected "not running" outcome.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

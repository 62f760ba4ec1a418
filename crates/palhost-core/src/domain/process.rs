//! Snapshot of a host OS process.

use serde::{Deserialize, Serialize};

/// A process as seen in one enumeration of the host process table.
///
/// Pids are reused by the OS after exit, so a handle is only meaningful at
/// the moment it was read. Re-derive it for every operation instead of
/// storing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessHandle {
    /// OS-assigned process id.
    pub pid: u32,
    /// Executable file name (e.g. `PalServer-Win64-Test-Cmd.exe`).
    pub name: String,
}

impl ProcessHandle {
    /// Create a new process handle.
    #[must_use]
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
        }
    }

    /// Case-sensitive substring match on the executable name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }
}

impl std::fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (pid {})", self.name, self.pid)
    }
}

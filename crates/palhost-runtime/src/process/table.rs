//! `ProcessTable` backed by `sysinfo`.

use palhost_core::{ProcessError, ProcessHandle, ProcessTable};
use sysinfo::{ProcessesToUpdate, System};

/// Reads the host process table through `sysinfo`.
///
/// A new `System` is built for every call so results never go stale between
/// lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProcessTable;

impl SysinfoProcessTable {
    pub const fn new() -> Self {
        Self
    }
}

impl ProcessTable for SysinfoProcessTable {
    fn processes(&self) -> Result<Vec<ProcessHandle>, ProcessError> {
        let mut system = System::new();
        let refreshed = system.refresh_processes(ProcessesToUpdate::All, true);
        if refreshed == 0 {
            return Err(ProcessError::Enumeration(
                "process table returned no entries".to_string(),
            ));
        }

        let handles: Vec<ProcessHandle> = system
            .processes()
            .iter()
            // Linux reports threads alongside processes; skip them
            .filter(|(_, process)| process.thread_kind().is_none())
            .map(|(pid, process)| {
                ProcessHandle::new(pid.as_u32(), process.name().to_string_lossy())
            })
            .collect();

        tracing::trace!(count = handles.len(), "Enumerated processes");
        Ok(handles)
    }
}

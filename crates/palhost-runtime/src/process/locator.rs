//! Find a process by executable-name substring or by pid.

use palhost_core::{ProcessError, ProcessHandle, ProcessTable};
use tracing::debug;

use super::table::SysinfoProcessTable;

/// Lookups over a [`ProcessTable`].
///
/// # Ambiguity
///
/// [`find_by_name`](Self::find_by_name) returns the first match in
/// enumeration order, and that order is unspecified. If two processes share
/// the substring either may come back. Use a specific substring, or call
/// [`find_all_by_name`](Self::find_all_by_name) and decide.
#[derive(Debug, Clone, Default)]
pub struct ProcessLocator<T = SysinfoProcessTable> {
    table: T,
}

impl ProcessLocator<SysinfoProcessTable> {
    /// Locator over the real host process table.
    pub const fn system() -> Self {
        Self {
            table: SysinfoProcessTable::new(),
        }
    }
}

impl<T: ProcessTable> ProcessLocator<T> {
    pub const fn new(table: T) -> Self {
        Self { table }
    }

    /// First process whose executable name contains `name` (case-sensitive).
    ///
    /// An empty `name` matches nothing.
    pub fn find_by_name(&self, name: &str) -> Result<ProcessHandle, ProcessError> {
        if name.is_empty() {
            return Err(ProcessError::name_not_found(name));
        }

        let found = self
            .table
            .processes()?
            .into_iter()
            .find(|process| process.name_contains(name));

        match found {
            Some(handle) => {
                debug!(pid = handle.pid, name = %handle.name, query = name, "Found process by name");
                Ok(handle)
            }
            None => {
                debug!(query = name, "No process matched name");
                Err(ProcessError::name_not_found(name))
            }
        }
    }

    /// Every process whose executable name contains `name`, in enumeration order.
    pub fn find_all_by_name(&self, name: &str) -> Result<Vec<ProcessHandle>, ProcessError> {
        if name.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .table
            .processes()?
            .into_iter()
            .filter(|process| process.name_contains(name))
            .collect())
    }

    /// The process with exactly this pid.
    pub fn find_by_pid(&self, pid: u32) -> Result<ProcessHandle, ProcessError> {
        self.table
            .processes()?
            .into_iter()
            .find(|process| process.pid == pid)
            .ok_or_else(|| ProcessError::pid_not_found(pid))
    }

    /// `Ok(None)` when nothing matches, instead of an error.
    ///
    /// "Not running" is the normal answer to a status query; only
    /// enumeration failures are errors here.
    pub fn is_running(&self, name: &str) -> Result<Option<ProcessHandle>, ProcessError> {
        match self.find_by_name(name) {
            Ok(handle) => Ok(Some(handle)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

//! Process table port.

use super::ProcessError;
use crate::domain::ProcessHandle;

/// One read of the host process table.
///
/// Implementations return processes in whatever order the OS enumerates
/// them; callers must not assume it is stable or sorted.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait ProcessTable: Send + Sync {
    /// Enumerate every process visible to the current user.
    fn processes(&self) -> Result<Vec<ProcessHandle>, ProcessError>;
}

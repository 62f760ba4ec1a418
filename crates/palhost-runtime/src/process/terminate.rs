//! Unconditional termination by pid.

use palhost_core::ProcessError;

#[cfg(unix)]
use nix::errno::Errno;
#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;

/// Ask the OS to kill `pid` immediately.
///
/// # Strategy
/// - Unix: `SIGKILL` via nix. The target gets no chance to flush or save.
/// - Windows: `OpenProcess(PROCESS_TERMINATE)` then `TerminateProcess`.
///
/// Returns once the OS has accepted the request; it does not wait for the
/// process to exit or reap it.
///
/// # Errors
/// - `NotFound` if `pid` is not a running process (never a silent success)
/// - `PermissionDenied` if the caller may not signal it
/// - `Os` for anything else
pub fn terminate(pid: u32) -> Result<(), ProcessError> {
    #[cfg(unix)]
    let result = terminate_unix(pid);

    #[cfg(windows)]
    let result = terminate_windows(pid);

    #[cfg(not(any(unix, windows)))]
    let result = Err(ProcessError::Os {
        pid,
        reason: "process termination is not supported on this platform".to_string(),
    });

    match &result {
        Ok(()) => tracing::info!(pid, "Sent kill request"),
        Err(e) => tracing::debug!(pid, error = %e, "Kill request failed"),
    }
    result
}

#[cfg(unix)]
fn terminate_unix(pid: u32) -> Result<(), ProcessError> {
    // 0 and anything that does not fit a positive pid_t would address a
    // process group (or every process) rather than one process.
    let raw = i32::try_from(pid)
        .ok()
        .filter(|raw| *raw > 0)
        .ok_or_else(|| ProcessError::pid_not_found(pid))?;

    signal::kill(Pid::from_raw(raw), Signal::SIGKILL).map_err(|errno| classify(pid, errno))
}

/// Map a failed `kill(2)` to the caller-facing error.
#[cfg(unix)]
fn classify(pid: u32, errno: Errno) -> ProcessError {
    match errno {
        Errno::ESRCH => ProcessError::pid_not_found(pid),
        Errno::EPERM => ProcessError::PermissionDenied { pid },
        other => ProcessError::Os {
            pid,
            reason: other.to_string(),
        },
    }
}

#[cfg(windows)]
#[allow(unsafe_code)]
fn terminate_windows(pid: u32) -> Result<(), ProcessError> {
    use windows::Win32::Foundation::CloseHandle;
    use windows::Win32::System::Threading::{OpenProcess, PROCESS_TERMINATE, TerminateProcess};

    // pid 0 is the idle process, never a server
    if pid == 0 {
        return Err(ProcessError::pid_not_found(pid));
    }

    // SAFETY: the handle is owned by this function and closed before it returns
    let handle =
        unsafe { OpenProcess(PROCESS_TERMINATE, false, pid) }.map_err(|e| classify(pid, &e))?;
    let result = unsafe { TerminateProcess(handle, 1) }.map_err(|e| classify(pid, &e));
    let _ = unsafe { CloseHandle(handle) };
    result
}

/// Map a failed Win32 call to the caller-facing error.
///
/// `OpenProcess` reports a pid that is not running as `ERROR_INVALID_PARAMETER`.
#[cfg(windows)]
fn classify(pid: u32, err: &windows::core::Error) -> ProcessError {
    use windows::Win32::Foundation::{ERROR_ACCESS_DENIED, ERROR_INVALID_PARAMETER};

    let code = err.code();
    if code == ERROR_ACCESS_DENIED.to_hresult() {
        ProcessError::PermissionDenied { pid }
    } else if code == ERROR_INVALID_PARAMETER.to_hresult() {
        ProcessError::pid_not_found(pid)
    } else {
        ProcessError::Os {
            pid,
            reason: err.to_string(),
        }
    }
}

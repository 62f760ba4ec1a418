//! Stop command handler.

use palhost_core::ProcessError;
use palhost_runtime::terminate;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Kill the dedicated server, or an explicit pid, and audit the outcome.
///
/// Without `--pid` the server is located by its process name. With `--pid`
/// the process must still exist at lookup time.
pub fn execute(ctx: &CliContext, pid: Option<u32>) -> Result<u32, CliError> {
    let lookup = match pid {
        Some(pid) => ctx.locator.find_by_pid(pid),
        None => ctx.locator.find_by_name(&ctx.paths.server_process_name),
    };

    let handle = match lookup {
        Ok(handle) => handle,
        Err(e) => {
            if e.is_not_found() {
                ctx.audit("Stop requested but server is not running");
            }
            return Err(e.into());
        }
    };

    ctx.audit(&format!("Stopping server ({handle})"));

    match terminate(handle.pid) {
        Ok(()) => {
            ctx.audit("Server stopped");
            println!("Stopped {handle}");
            Ok(handle.pid)
        }
        // Exited between lookup and kill: it is stopped either way, but say so
        Err(ProcessError::NotFound(reason)) => {
            ctx.audit("Server exited before it could be stopped");
            Err(ProcessError::NotFound(reason).into())
        }
        Err(e) => {
            ctx.audit(&format!("Failed to stop server: {e}"));
            Err(e.into())
        }
    }
}

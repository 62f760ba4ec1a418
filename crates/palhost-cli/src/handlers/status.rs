//! Status command handler.

use palhost_core::ProcessHandle;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// `{"running": bool, "process": {..} | null}`
pub fn render_json(running: Option<&ProcessHandle>) -> Result<String, CliError> {
    let process = serde_json::to_value(running)?;
    Ok(serde_json::json!({
        "running": running.is_some(),
        "process": process,
    })
    .to_string())
}

/// Report whether the dedicated server process is running.
pub fn execute(ctx: &CliContext, json: bool) -> Result<Option<ProcessHandle>, CliError> {
    let running = ctx.locator.is_running(&ctx.paths.server_process_name)?;

    if json {
        println!("{}", render_json(running.as_ref())?);
    } else {
        match &running {
            Some(handle) => println!("Server running: {handle}"),
            None => println!("Server not running"),
        }
    }

    Ok(running)
}

//! Log command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Append `message` to the activity log, optionally echoing it to a console.
///
/// Unlike internal auditing, a failure here is the command's result and is
/// returned to the caller.
pub fn execute(ctx: &CliContext, message: &str, console: Option<&str>) -> Result<(), CliError> {
    match console {
        Some(console_id) => {
            ctx.logger
                .record_with_sink(message, ctx.console.as_ref(), console_id)?;
        }
        None => ctx.logger.record(message)?,
    }
    Ok(())
}

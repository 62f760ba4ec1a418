//! Find command handler.

use palhost_core::ProcessHandle;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// What to look up.
#[derive(Debug, Clone)]
pub enum FindTarget {
    Name(String),
    Pid(u32),
}

impl FindTarget {
    /// Build from the mutually exclusive `--name` / `--pid` flags.
    ///
    /// clap guarantees exactly one is present; name wins if both somehow are.
    pub fn from_args(name: Option<String>, pid: Option<u32>) -> Option<Self> {
        name.map(Self::Name).or_else(|| pid.map(Self::Pid))
    }
}

/// JSON form of a lookup result.
pub fn render_json(handle: &ProcessHandle) -> Result<String, CliError> {
    Ok(serde_json::to_string(handle)?)
}

/// Look up one process and print it.
pub fn execute(ctx: &CliContext, target: &FindTarget, json: bool) -> Result<ProcessHandle, CliError> {
    let handle = match target {
        FindTarget::Name(name) => ctx.locator.find_by_name(name)?,
        FindTarget::Pid(pid) => ctx.locator.find_by_pid(*pid)?,
    };

    if json {
        println!("{}", render_json(&handle)?);
    } else {
        println!("{}\t{}", handle.pid, handle.name);
    }

    Ok(handle)
}

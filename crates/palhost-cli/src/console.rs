//! Console sink that forwards entries to `tracing`.

use palhost_core::{ConsoleEntry, ConsoleSink};

/// Writes console entries as `tracing` events on the `palhost::console` target.
///
/// Stands in for a GUI event bus when running from a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsoleSink;

impl ConsoleSink for TracingConsoleSink {
    fn emit(&self, console_id: &str, entry: &ConsoleEntry) {
        tracing::info!(
            target: "palhost::console",
            console_id,
            msg_type = entry.msg_type.as_str(),
            timestamp = entry.timestamp,
            "{}",
            entry.message
        );
    }
}

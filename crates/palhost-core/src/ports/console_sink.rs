//! Notification sink for console entries.
//!
//! The activity logger can forward each recorded line to an operator
//! console. What a "console" is (a GUI event bus, a tracing subscriber, a
//! websocket) is the adapter's business.

use crate::domain::ConsoleEntry;

/// Event name used by front-ends listening for console entries.
pub const ADD_CONSOLE_ENTRY: &str = "ADD_CONSOLE_ENTRY";

/// Console fed by the `SteamCMD` installer.
pub const STEAM_CMD_CONSOLE: &str = "STEAM_CMD";

/// Console fed by the dedicated server.
pub const SERVER_CONSOLE: &str = "DEDICATED_SERVER";

/// Port for forwarding console entries to an external channel.
///
/// Fire-and-forget: implementations must not block the caller and must not
/// report delivery failures back. Log and move on.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait ConsoleSink: Send + Sync {
    /// Hand an entry to the console identified by `console_id`.
    fn emit(&self, console_id: &str, entry: &ConsoleEntry);
}

/// A sink that discards every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConsoleSink;

impl NoopConsoleSink {
    pub const fn new() -> Self {
        Self
    }
}

impl ConsoleSink for NoopConsoleSink {
    fn emit(&self, _console_id: &str, _entry: &ConsoleEntry) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn noop_sink_accepts_entries() {
        let sink = NoopConsoleSink::new();
        sink.emit(SERVER_CONSOLE, &ConsoleEntry::stdout("ignored"));
    }

    #[test]
    fn sink_is_object_safe() {
        let sink: Arc<dyn ConsoleSink> = Arc::new(NoopConsoleSink);
        sink.emit(STEAM_CMD_CONSOLE, &ConsoleEntry::stdout("ignored"));
    }

    #[test]
    fn mock_sink_sees_console_id() {
        let mut sink = MockConsoleSink::new();
        sink.expect_emit()
            .withf(|id, entry| id == SERVER_CONSOLE && entry.message == "hi")
            .times(1)
            .return_const(());

        sink.emit(SERVER_CONSOLE, &ConsoleEntry::stdout("hi"));
    }
}

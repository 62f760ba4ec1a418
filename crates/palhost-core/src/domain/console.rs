//! Structured console entries handed to notification sinks.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Which stream a console line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

impl ConsoleStream {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// One line destined for an operator console.
///
/// Ephemeral: built for a single `record` call, handed to a sink, dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleEntry {
    pub message: String,
    /// Unix timestamp in seconds
    pub timestamp: i64,
    pub msg_type: ConsoleStream,
}

impl ConsoleEntry {
    /// Create an entry with an explicit timestamp.
    pub fn new(message: impl Into<String>, timestamp: i64, msg_type: ConsoleStream) -> Self {
        Self {
            message: message.into(),
            timestamp,
            msg_type,
        }
    }

    /// Stdout entry stamped with the current time.
    pub fn stdout(message: impl Into<String>) -> Self {
        Self::new(message, Utc::now().timestamp(), ConsoleStream::Stdout)
    }
}

//! Activity log error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to record an activity line.
///
/// Recoverable: losing one audit line should not take down a server
/// management session. The caller decides whether to abort.
#[derive(Debug, Error)]
pub enum ActivityLogError {
    /// The log file could not be opened (or created) for append.
    #[error("Failed to open activity log {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The line could not be written.
    #[error("Failed to write activity log {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

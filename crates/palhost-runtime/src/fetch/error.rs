//! Download error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from [`ArtifactFetcher`](super::ArtifactFetcher).
///
/// After any of these the destination file, if it exists, is untrusted.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The source is not an absolute http(s) URL.
    #[error("Invalid download URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connecting, sending or reading the body failed.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Download of {url} failed: HTTP {status}")]
    Status { url: String, status: u16 },

    /// Creating or writing the destination failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Transport-side failure (as opposed to a local file problem).
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }
}

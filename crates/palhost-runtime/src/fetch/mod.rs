//! Artifact download: one HTTP GET streamed into one file.
//!
//! This is the primitive the installer flow builds on. It deliberately does
//! not retry, verify checksums or write atomically; a failed fetch can leave
//! a partial file behind that callers must not trust.

mod error;

pub use error::FetchError;

use std::path::Path;

use futures_util::StreamExt;
use reqwest::{Client, Url};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Progress callback for downloads.
/// Called with (`downloaded_bytes`, `total_bytes`); `total_bytes` is 0 when
/// the server did not send a content length.
pub type FetchProgress<'a> = &'a (dyn Fn(u64, u64) + Send + Sync);

/// Streams remote files to disk.
#[derive(Debug, Clone)]
pub struct ArtifactFetcher {
    client: Client,
}

impl ArtifactFetcher {
    /// Build a fetcher with its own HTTP client.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("palhost/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Network)?;
        Ok(Self { client })
    }

    /// Reuse an existing client (connection pool, proxies, timeouts).
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Download `url` into `dest`, creating or truncating it.
    ///
    /// Returns the number of bytes written. On success `dest` holds exactly
    /// the response body.
    ///
    /// A non-2xx status fails with [`FetchError::Status`] before `dest` is
    /// opened, so an error page is never saved in place of the artifact and
    /// an existing file at `dest` is left as it was.
    pub async fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        self.fetch_inner(url, dest, None).await
    }

    /// Like [`fetch`](Self::fetch), reporting progress after every chunk.
    pub async fn fetch_with_progress(
        &self,
        url: &str,
        dest: &Path,
        progress: FetchProgress<'_>,
    ) -> Result<u64, FetchError> {
        self.fetch_inner(url, dest, Some(progress)).await
    }

    async fn fetch_inner(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<FetchProgress<'_>>,
    ) -> Result<u64, FetchError> {
        let url = parse_http_url(url)?;
        debug!(url = %url, dest = %dest.display(), "Starting download");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let total = response.content_length().unwrap_or(0);

        // The response (and its connection) is dropped if this fails
        let mut file = File::create(dest).await.map_err(|source| FetchError::Io {
            path: dest.to_path_buf(),
            source,
        })?;

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(FetchError::Network)?;
            file.write_all(&chunk)
                .await
                .map_err(|source| FetchError::Io {
                    path: dest.to_path_buf(),
                    source,
                })?;
            downloaded += chunk.len() as u64;

            if let Some(cb) = progress {
                cb(downloaded, total);
            }
        }

        // tokio's File hands writes to a blocking pool; flush before the handle drops
        file.flush().await.map_err(|source| FetchError::Io {
            path: dest.to_path_buf(),
            source,
        })?;

        info!(url = %url, dest = %dest.display(), bytes = downloaded, "Download complete");
        Ok(downloaded)
    }
}

/// Accept only absolute http(s) URLs.
fn parse_http_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

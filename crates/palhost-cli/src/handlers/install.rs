//! Install-steamcmd command handler.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use palhost_core::{DirectoryCreationStrategy, ensure_directory};
use palhost_runtime::ArtifactFetcher;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Download the `SteamCMD` archive into the layout.
///
/// Creates `steamcmd/` and `backups/` first. An explicit `dest` must sit in
/// an existing, writable directory; it is never created. Extraction and
/// running the installer are left to `SteamCMD` tooling.
pub async fn execute(
    ctx: &CliContext,
    url: Option<String>,
    dest: Option<PathBuf>,
) -> Result<PathBuf, CliError> {
    ctx.paths.ensure_layout()?;

    if let Some(parent) = dest
        .as_deref()
        .and_then(std::path::Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        ensure_directory(parent, DirectoryCreationStrategy::Disallow)?;
    }

    let url = url.unwrap_or_else(|| ctx.paths.steamcmd_url.clone());
    let dest = dest.unwrap_or_else(|| ctx.paths.steamcmd_archive_path());

    ctx.audit(&format!("Downloading SteamCMD from {url}"));

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );

    let fetcher = ArtifactFetcher::new()?;
    let result = fetcher
        .fetch_with_progress(&url, &dest, &|downloaded: u64, total: u64| {
            if total > 0 && pb.length() != Some(total) {
                pb.set_length(total);
            }
            pb.set_position(downloaded);
        })
        .await;

    match result {
        Ok(bytes) => {
            pb.finish_with_message("Download complete");
            ctx.audit(&format!(
                "SteamCMD downloaded ({bytes} bytes) to {}",
                dest.display()
            ));
            Ok(dest)
        }
        Err(e) => {
            pb.abandon();
            ctx.audit(&format!("SteamCMD download failed: {e}"));
            Err(e.into())
        }
    }
}

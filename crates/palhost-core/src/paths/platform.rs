//! Anchor directory detection.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the anchor directory.
///
/// Useful for running the CLI from a build tree against an existing server
/// install, and for tests.
pub const BASE_DIR_ENV: &str = "PALHOST_BASE_DIR";

/// Directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf, PathError> {
    let exe = env::current_exe().map_err(|e| PathError::ExecutableDir(e.to_string()))?;

    exe.parent()
        .map(std::path::Path::to_path_buf)
        .ok_or_else(|| {
            PathError::ExecutableDir(format!("{} has no parent directory", exe.display()))
        })
}

/// Get the anchor directory every other path is joined onto.
///
/// Resolution order:
/// 1. `PALHOST_BASE_DIR` environment variable (must be absolute)
/// 2. Directory containing the running executable
pub fn base_dir() -> Result<PathBuf, PathError> {
    if let Ok(raw) = env::var(BASE_DIR_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            let path = PathBuf::from(trimmed);
            if !path.is_absolute() {
                return Err(PathError::NotAbsolute(path));
            }
            return Ok(path);
        }
    }

    executable_dir()
}

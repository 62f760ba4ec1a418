//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// The directory containing the running executable could not be determined.
    ///
    /// Every other path is derived from it, so callers should treat this as
    /// a startup failure.
    #[error("Cannot determine executable directory: {0}")]
    ExecutableDir(String),

    /// An anchor directory was given as a relative path.
    #[error("Base directory must be absolute, got {0}")]
    NotAbsolute(PathBuf),

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A directory does not exist and creation was not allowed.
    #[error("Directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// A directory is not writable.
    #[error("Directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },
}

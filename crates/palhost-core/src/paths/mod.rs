//! Filesystem layout for the managed server and its tooling.
//!
//! Every path the rest of palhost touches is derived here from a single
//! anchor directory:
//! - `SteamCMD` installer location and executable
//! - Dedicated server installation, executable and config files
//! - Save data and backups
//! - The activity log
//!
//! # Design
//!
//! - `PathConfiguration` is a plain immutable value; `PathRegistry` owns the
//!   one instance a process uses and hands out `Arc` handles to it
//! - Resolution failures surface as `PathError`; nothing here panics
//! - OS-specific anchor detection is kept private in `platform`

mod ensure;
mod error;
mod layout;
mod platform;
mod registry;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Anchor detection
pub use platform::{BASE_DIR_ENV, base_dir, executable_dir};

// Layout
pub use layout::{
    PathConfiguration, SERVER_APP_ID, SERVER_EXE_NAME, SERVER_PROCESS_NAME, STEAMCMD_EXE_NAME,
    STEAMCMD_URL,
};

// Process-wide owner
pub use registry::PathRegistry;

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};

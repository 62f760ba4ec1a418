//! The fixed on-disk layout of a palhost installation.

use std::fmt;
use std::path::{Path, PathBuf};

use super::ensure::{DirectoryCreationStrategy, ensure_directory};
use super::error::PathError;
use super::platform::base_dir;

/// Archive containing the `SteamCMD` installer.
pub const STEAMCMD_URL: &str = "https://steamcdn-a.akamaihd.net/client/installer/steamcmd.zip";

/// Steam application id of the Palworld dedicated server.
pub const SERVER_APP_ID: &str = "2394010";

/// Executable name the running server shows up as in the process table.
///
/// This is the shipping binary `PalServer.exe` hands off to, so it differs
/// from [`SERVER_EXE_NAME`].
pub const SERVER_PROCESS_NAME: &str = "PalServer-Win64-Test-Cmd.exe";

/// Launcher executable inside the server directory.
pub const SERVER_EXE_NAME: &str = "PalServer.exe";

/// Installer executable inside the `SteamCMD` directory.
pub const STEAMCMD_EXE_NAME: &str = "steamcmd.exe";

/// Absolute locations of everything palhost reads or writes.
///
/// Built once from an anchor directory and never mutated afterwards; share it
/// through [`PathRegistry`](super::PathRegistry) or by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfiguration {
    /// Anchor directory every other path is joined onto
    pub base_dir: PathBuf,
    /// `SteamCMD` root
    pub steamcmd_dir: PathBuf,
    /// `SteamCMD` executable
    pub steamcmd_exe: PathBuf,
    /// Remote archive for the installer tool
    pub steamcmd_url: String,
    /// Dedicated server installation root
    pub server_dir: PathBuf,
    /// Dedicated server launcher
    pub server_exe: PathBuf,
    /// Template settings file shipped with the server
    pub server_default_config_path: PathBuf,
    /// Directory holding the active settings files
    pub server_config_dir: PathBuf,
    /// Active `PalWorldSettings.ini`
    pub server_config_path: PathBuf,
    /// Active `GameUserSettings.ini`
    pub server_game_user_settings_path: PathBuf,
    /// World save data
    pub server_save_dir: PathBuf,
    /// Backup archives
    pub backups_dir: PathBuf,
    /// Append-only activity log
    pub logs_path: PathBuf,
    /// Executable name used to locate the running server
    pub server_process_name: String,
    /// Steam application id passed to the installer
    pub app_id: String,
}

impl PathConfiguration {
    /// Build the layout under an explicit anchor directory.
    ///
    /// `base_dir` must be absolute so that every derived path is too.
    pub fn from_base_dir(base_dir: impl Into<PathBuf>) -> Result<Self, PathError> {
        let base_dir = base_dir.into();
        if !base_dir.is_absolute() {
            return Err(PathError::NotAbsolute(base_dir));
        }

        let steamcmd_dir = base_dir.join("steamcmd");
        let server_dir = base_dir.join("server");
        let saved_dir = server_dir.join("Pal").join("Saved");
        let server_config_dir = saved_dir.join("Config").join("WindowsServer");

        Ok(Self {
            steamcmd_exe: steamcmd_dir.join(STEAMCMD_EXE_NAME),
            steamcmd_dir,
            steamcmd_url: STEAMCMD_URL.to_string(),
            server_exe: server_dir.join(SERVER_EXE_NAME),
            server_default_config_path: server_dir.join("DefaultPalWorldSettings.ini"),
            server_config_path: server_config_dir.join("PalWorldSettings.ini"),
            server_game_user_settings_path: server_config_dir.join("GameUserSettings.ini"),
            server_config_dir,
            server_save_dir: saved_dir.join("SaveGames").join("0"),
            server_dir,
            backups_dir: base_dir.join("backups"),
            logs_path: base_dir.join("logs.txt"),
            server_process_name: SERVER_PROCESS_NAME.to_string(),
            app_id: SERVER_APP_ID.to_string(),
            base_dir,
        })
    }

    /// Resolve the layout for the current process.
    ///
    /// Anchors at `PALHOST_BASE_DIR` when set, otherwise at the directory
    /// containing the running executable.
    pub fn resolve() -> Result<Self, PathError> {
        let base = base_dir()?;
        tracing::debug!(base_dir = %base.display(), "Resolved palhost base directory");
        Self::from_base_dir(base)
    }

    /// Create the directories palhost itself writes into.
    ///
    /// Server directories are left alone; `SteamCMD` creates those during install.
    pub fn ensure_layout(&self) -> Result<(), PathError> {
        ensure_directory(&self.steamcmd_dir, DirectoryCreationStrategy::AutoCreate)?;
        ensure_directory(&self.backups_dir, DirectoryCreationStrategy::AutoCreate)?;
        Ok(())
    }

    /// Where the downloaded installer archive is stored.
    pub fn steamcmd_archive_path(&self) -> PathBuf {
        self.steamcmd_dir.join("steamcmd.zip")
    }

    /// Every path field, labelled, in declaration order.
    pub fn entries(&self) -> [(&'static str, &Path); 12] {
        [
            ("base_dir", self.base_dir.as_path()),
            ("steamcmd_dir", self.steamcmd_dir.as_path()),
            ("steamcmd_exe", self.steamcmd_exe.as_path()),
            ("server_dir", self.server_dir.as_path()),
            ("server_exe", self.server_exe.as_path()),
            (
                "server_default_config_path",
                self.server_default_config_path.as_path(),
            ),
            ("server_config_dir", self.server_config_dir.as_path()),
            ("server_config_path", self.server_config_path.as_path()),
            (
                "server_game_user_settings_path",
                self.server_game_user_settings_path.as_path(),
            ),
            ("server_save_dir", self.server_save_dir.as_path()),
            ("backups_dir", self.backups_dir.as_path()),
            ("logs_path", self.logs_path.as_path()),
        ]
    }
}

impl fmt::Display for PathConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, path) in self.entries() {
            writeln!(f, "{key} = {}", path.display())?;
        }
        writeln!(f, "steamcmd_url = {}", self.steamcmd_url)?;
        writeln!(f, "server_process_name = {}", self.server_process_name)?;
        write!(f, "app_id = {}", self.app_id)
    }
}

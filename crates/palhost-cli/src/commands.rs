//! Subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every resolved path
    Paths,

    /// Report whether the dedicated server is running
    Status,

    /// Look up a host process by executable-name substring or pid
    Find {
        /// Case-sensitive substring of the executable name
        #[arg(long, conflicts_with = "pid", required_unless_present = "pid")]
        name: Option<String>,
        /// Exact process id
        #[arg(long)]
        pid: Option<u32>,
    },

    /// Kill the dedicated server (unconditionally; unsaved world state is lost)
    Stop {
        /// Kill this pid instead of looking the server up by name
        #[arg(long)]
        pid: Option<u32>,
    },

    /// Download the SteamCMD installer archive
    InstallSteamcmd {
        /// Override the download URL
        #[arg(long)]
        url: Option<String>,
        /// Override the destination file (default: steamcmd/steamcmd.zip)
        #[arg(long)]
        dest: Option<PathBuf>,
    },

    /// Append a line to the activity log
    Log {
        /// Text to record
        message: String,
        /// Also forward the line to this console (e.g. DEDICATED_SERVER)
        #[arg(long)]
        console: Option<String>,
    },
}

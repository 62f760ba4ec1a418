//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for managing a local Palworld dedicated server.
#[derive(Parser, Debug)]
#[command(name = "palhost")]
#[command(about = "Locate, stop and provision a local Palworld dedicated server")]
#[command(version)]
pub struct Cli {
    /// Directory the server layout is anchored at; relative paths are taken
    /// from the working directory. Without it, `PALHOST_BASE_DIR` (absolute)
    /// or the executable's directory is used.
    #[arg(long = "base-dir", global = true)]
    pub base_dir: Option<PathBuf>,

    /// Print lookups as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["palhost", "--verbose", "--base-dir", "/srv/pal", "status"]);
        assert!(cli.verbose);
        assert_eq!(cli.base_dir, Some(PathBuf::from("/srv/pal")));
        assert!(matches!(cli.command, Some(Commands::Status)));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["palhost", "find", "--name", "PalServer", "--json"]);
        assert!(cli.json);
    }
}

//! `PALHOST_BASE_DIR` handling through the CLI.
//!
//! Kept in its own test binary: it mutates the process environment.

use clap::Parser;
use palhost_cli::{Cli, CliConfig, CliError, bootstrap};
use palhost_core::PathError;
use palhost_core::paths::BASE_DIR_ENV;

#[allow(unsafe_code)]
fn set_base_dir_env(value: &str) {
    unsafe {
        std::env::set_var(BASE_DIR_ENV, value);
    }
}

#[test]
fn env_base_dir_must_be_absolute_but_flag_may_be_relative() {
    set_base_dir_env("relative/srv");

    let cli = Cli::parse_from(["palhost", "paths"]);
    assert!(cli.base_dir.is_none(), "env must not leak into --base-dir");

    let err = bootstrap(CliConfig::with_defaults().with_base_dir(cli.base_dir)).err();
    assert!(
        matches!(err, Some(CliError::Paths(PathError::NotAbsolute(_)))),
        "{err:?}"
    );

    // The flag still accepts a relative path
    let cli = Cli::parse_from(["palhost", "--base-dir", "relative/srv", "paths"]);
    let ctx = bootstrap(CliConfig::with_defaults().with_base_dir(cli.base_dir)).unwrap();
    assert!(ctx.paths.base_dir.is_absolute());

    let tmp = tempfile::tempdir().unwrap();
    set_base_dir_env(tmp.path().to_str().unwrap());
    let ctx = bootstrap(CliConfig::with_defaults()).unwrap();
    assert_eq!(ctx.paths.base_dir, tmp.path());
}

//! Command handlers against a scratch layout.

use std::fs;

use palhost_cli::handlers::find::{self, FindTarget};
use palhost_cli::handlers::{install, log, status, stop};
use palhost_cli::{CliConfig, CliContext, CliError, bootstrap};
use palhost_core::{PathError, ProcessError, ProcessHandle};
use tempfile::TempDir;

/// Above any pid the kernel will hand out.
const ABSENT_PID: u32 = i32::MAX.unsigned_abs();

fn context() -> (TempDir, CliContext) {
    let tmp = TempDir::new().unwrap();
    let ctx = bootstrap(CliConfig::with_defaults().with_base_dir(Some(tmp.path().into()))).unwrap();
    (tmp, ctx)
}

fn log_lines(ctx: &CliContext) -> Vec<String> {
    fs::read_to_string(&ctx.paths.logs_path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn log_command_appends_to_layout_log() {
    let (_tmp, ctx) = context();

    log::execute(&ctx, "Server started", None).unwrap();
    log::execute(&ctx, "Server started", Some("DEDICATED_SERVER")).unwrap();

    let lines = log_lines(&ctx);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.starts_with('[') && l.ends_with("] Server started")));
}

#[test]
fn log_command_reports_unwritable_log() {
    let (tmp, ctx) = context();
    fs::create_dir(tmp.path().join("logs.txt")).unwrap();

    let err = log::execute(&ctx, "lost", None).unwrap_err();
    assert!(matches!(err, CliError::ActivityLog(_)));
}

#[test]
fn status_reports_not_running() {
    let (_tmp, ctx) = context();
    assert!(status::execute(&ctx, true).unwrap().is_none());
}

#[test]
fn find_self_by_pid() {
    let (_tmp, ctx) = context();
    let pid = std::process::id();

    let handle = find::execute(&ctx, &FindTarget::Pid(pid), false).unwrap();
    assert_eq!(handle.pid, pid);
}

#[test]
fn json_output_round_trips_handle() {
    let handle = ProcessHandle::new(4242, "PalServer-Win64-Test-Cmd.exe");

    let found: serde_json::Value =
        serde_json::from_str(&find::render_json(&handle).unwrap()).unwrap();
    assert_eq!(
        found,
        serde_json::json!({ "pid": 4242, "name": "PalServer-Win64-Test-Cmd.exe" })
    );

    let running: serde_json::Value =
        serde_json::from_str(&status::render_json(Some(&handle)).unwrap()).unwrap();
    assert_eq!(running["running"], true);
    assert_eq!(running["process"]["pid"], 4242);

    let stopped: serde_json::Value =
        serde_json::from_str(&status::render_json(None).unwrap()).unwrap();
    assert_eq!(stopped, serde_json::json!({ "running": false, "process": null }));
}

#[test]
fn find_target_prefers_name() {
    assert!(matches!(
        FindTarget::from_args(Some("PalServer".into()), None),
        Some(FindTarget::Name(_))
    ));
    assert!(matches!(
        FindTarget::from_args(None, Some(7)),
        Some(FindTarget::Pid(7))
    ));
    assert!(FindTarget::from_args(None, None).is_none());
}

#[test]
fn stop_without_server_is_not_found_and_audited() {
    let (_tmp, ctx) = context();

    let err = stop::execute(&ctx, None).unwrap_err();
    assert!(matches!(err, CliError::Process(ProcessError::NotFound(_))));
    assert_eq!(err.exit_code(), 1);

    let lines = log_lines(&ctx);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("Stop requested but server is not running"));
}

#[test]
fn stop_absent_pid_is_not_found() {
    let (_tmp, ctx) = context();

    let err = stop::execute(&ctx, Some(ABSENT_PID)).unwrap_err();
    assert!(matches!(err, CliError::Process(ProcessError::NotFound(_))));
}

#[test]
#[cfg(unix)]
fn stop_by_pid_kills_and_audits() {
    let mut child = std::process::Command::new("sleep").arg("60").spawn().unwrap();
    let (_tmp, ctx) = context();

    let pid = stop::execute(&ctx, Some(child.id())).unwrap();
    assert_eq!(pid, child.id());
    assert!(!child.wait().unwrap().success());

    let lines = log_lines(&ctx);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Stopping server"));
    assert!(lines[1].ends_with("Server stopped"));
}

#[tokio::test]
async fn install_refuses_to_create_explicit_dest_dir() {
    let (tmp, ctx) = context();
    let dest = tmp.path().join("elsewhere").join("steamcmd.zip");

    let err = install::execute(&ctx, None, Some(dest.clone()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CliError::Paths(PathError::DirectoryNotFound(_))),
        "{err:?}"
    );
    assert_eq!(err.exit_code(), 78);
    assert!(!dest.parent().unwrap().exists());
    // Layout dirs are still prepared; nothing was downloaded or audited
    assert!(ctx.paths.steamcmd_dir.is_dir());
    assert!(log_lines(&ctx).is_empty());
}

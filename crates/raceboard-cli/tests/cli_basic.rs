//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_raceboard"))
        .args(args)
        .env("RACEBOARD_DATA_DIR", data_dir)
        .env_remove("RACEBOARD_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

fn add_team(data_dir: &Path, name: &str) -> i64 {
    let stdout = run_ok(data_dir, &["team", "add", name]);
    let first = stdout.lines().next().unwrap();
    first
        .strip_prefix("Team added: ")
        .unwrap()
        .trim()
        .parse()
        .unwrap()
}

fn board_json(data_dir: &Path) -> serde_json::Value {
    serde_json::from_str(&run_ok(data_dir, &["board", "--json"])).unwrap()
}

#[test]
fn test_team_add_and_list() {
    let dir = TempDir::new().unwrap();
    let id = add_team(dir.path(), "  Alpha  ");

    let teams: serde_json::Value =
        serde_json::from_str(&run_ok(dir.path(), &["team", "list", "--json"])).unwrap();
    let teams = teams.as_array().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["id"], id);
    assert_eq!(teams[0]["name"], "Alpha");
    assert_eq!(teams[0]["milestones"].as_array().unwrap().len(), 3);

    let text = run_ok(dir.path(), &["team", "list"]);
    assert!(text.contains("Alpha"));
}

#[test]
fn test_blank_team_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["team", "add", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("team name is empty"));
    assert!(run_ok(dir.path(), &["team", "list"]).contains("no teams yet"));
}

#[test]
fn test_session_start_and_status() {
    let dir = TempDir::new().unwrap();
    let status: serde_json::Value =
        serde_json::from_str(&run_ok(dir.path(), &["session", "status", "--json"])).unwrap();
    assert_eq!(status["state"], "idle");
    assert_eq!(status["elapsed_ms"], 0);

    let started = run_ok(dir.path(), &["session", "start"]);
    assert!(started.contains("session_started"));
    let again = run_ok(dir.path(), &["session", "start"]);
    assert!(again.contains("session running"));

    let status: serde_json::Value =
        serde_json::from_str(&run_ok(dir.path(), &["session", "status", "--json"])).unwrap();
    assert_eq!(status["state"], "running");
}

#[test]
fn test_toggle_updates_ranking() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["session", "start"]);
    let alpha = add_team(dir.path(), "Alpha");
    let beta = add_team(dir.path(), "Beta");

    let out = run_ok(
        dir.path(),
        &["milestone", "toggle", &beta.to_string(), "1"],
    );
    assert!(out.contains("milestone_completed"));

    let board = board_json(dir.path());
    assert_eq!(board["standings"][0]["team"]["id"], beta);
    assert_eq!(board["standings"][0]["position"], 1);
    assert_eq!(board["standings"][1]["team"]["id"], alpha);

    for m in ["1", "2", "3"] {
        run_ok(dir.path(), &["milestone", "toggle", &alpha.to_string(), m]);
    }
    let board = board_json(dir.path());
    assert_eq!(board["standings"][0]["team"]["id"], alpha);
    let total = board["standings"][0]["team"]["totalTime"].as_u64().unwrap();
    assert!(total > 0, "finished team should carry a total time, got {total}");
    assert_eq!(board["standings"][1]["team"]["totalTime"], 0);
}

#[test]
fn test_toggle_unknown_reference_fails() {
    let dir = TempDir::new().unwrap();
    let id = add_team(dir.path(), "Alpha");

    let (_, stderr, code) = run_cli(dir.path(), &["milestone", "toggle", "12345", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no team with id 12345"));

    let (_, stderr, code) = run_cli(dir.path(), &["milestone", "toggle", &id.to_string(), "9"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("has no milestone 9"));
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &["session", "start"]);
    add_team(dir.path(), "Alpha");

    let (_, _, code) = run_cli(dir.path(), &["reset"]);
    assert_eq!(code, 1);
    assert_eq!(board_json(dir.path())["standings"].as_array().unwrap().len(), 1);

    let out = run_ok(dir.path(), &["reset", "--yes"]);
    assert!(out.contains("1 team(s) cleared"));
    let board = board_json(dir.path());
    assert!(board["standings"].as_array().unwrap().is_empty());
    assert_eq!(board["session"]["state"], "idle");
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run_ok(dir.path(), &["config", "get", "feedback.muted"]).trim(), "false");
    run_ok(dir.path(), &["config", "set", "feedback.muted", "true"]);
    assert_eq!(run_ok(dir.path(), &["config", "get", "feedback.muted"]).trim(), "true");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "feedback.muted", "maybe"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(dir.path(), &["config", "get", "no.such.key"]);
    assert_eq!(code, 1);

    run_ok(dir.path(), &["config", "reset"]);
    assert!(run_ok(dir.path(), &["config", "list"]).contains("feedback.muted = false"));
}

#[test]
fn test_presentation_mode_hides_controls() {
    let dir = TempDir::new().unwrap();
    add_team(dir.path(), "Alpha");
    assert!(run_ok(dir.path(), &["board"]).contains("reset --yes"));

    run_ok(dir.path(), &["config", "set", "display.presentation_mode", "true"]);
    let text = run_ok(dir.path(), &["board"]);
    assert!(text.contains("Alpha"));
    assert!(!text.contains("reset --yes"));
}

#[test]
fn test_milestone_list() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &["milestone", "list"]);
    assert_eq!(out.lines().count(), 3);
    assert!(out.contains("Ship It"));
}

#[test]
fn test_watch_without_session_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["watch"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no session running"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &["completions", "bash"]);
    assert!(out.contains("raceboard"));
}

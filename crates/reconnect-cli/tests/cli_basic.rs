//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(dir: &TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_reconnect"))
        .args(args)
        .env("RECONNECT_DATA_DIR", dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let (code, stdout, stderr) = run_cli(dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("stdout is not JSON")
}

/// Commands that print a status line before the JSON body.
fn json_after_first_line(stdout: &str) -> serde_json::Value {
    let body = stdout.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
    serde_json::from_str(body).expect("body is not JSON")
}

fn add_contact(dir: &TempDir, args: &[&str]) -> String {
    let mut full = vec!["contact", "add"];
    full.extend_from_slice(args);
    let (code, stdout, stderr) = run_cli(dir, &full);
    assert_eq!(code, 0, "contact add failed: {stderr}");
    json_after_first_line(&stdout)["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn test_seed_then_suggest() {
    let dir = TempDir::new().unwrap();
    let seeded = run_json(&dir, &["seed"]);
    assert_eq!(seeded["seeded"], true);
    assert_eq!(seeded["count"], 3);

    let out = run_json(&dir, &["suggest", "--mode", "daily", "--count", "3", "--json"]);
    let names: Vec<_> = out
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["fullName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Taylor Kim", "Jamie Lee", "Alex Johnson"]);
    assert!(out[0]["daysSince"].is_null());
    assert_eq!(out[1]["daysSince"], 90);

    let again = run_json(&dir, &["seed"]);
    assert_eq!(again["seeded"], false);
}

#[test]
fn test_suggest_count_one() {
    let dir = TempDir::new().unwrap();
    run_json(&dir, &["seed"]);
    let out = run_json(&dir, &["suggest", "--count", "1", "--json"]);
    assert_eq!(out.as_array().unwrap().len(), 1);
    assert_eq!(out[0]["fullName"], "Taylor Kim");
}

#[test]
fn test_suggest_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&dir, &["suggest", "--mode", "monthly"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("mode"), "stderr: {stderr}");
}

#[test]
fn test_interaction_makes_contact_not_due() {
    let dir = TempDir::new().unwrap();
    let id = add_contact(&dir, &["Sam Rivera", "--phone", "+15550001111", "--frequency", "7"]);

    let due = run_json(&dir, &["contact", "due", &id]);
    assert_eq!(due["due"], true);
    assert!(due["score"].is_null());

    let (code, stdout, stderr) = run_cli(
        &dir,
        &["interaction", "log", &id, "--type", "text", "--message", "hi"],
    );
    assert_eq!(code, 0, "interaction log failed: {stderr}");
    assert_eq!(json_after_first_line(&stdout)["type"], "text");

    let due = run_json(&dir, &["contact", "due", &id]);
    assert_eq!(due["due"], false);
    assert_eq!(due["score"], -7);

    let listed = run_json(&dir, &["interaction", "list", "--contact", &id, "--json"]);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[test]
fn test_contact_due_at_boundary() {
    let dir = TempDir::new().unwrap();
    let id = add_contact(
        &dir,
        &[
            "Boundary",
            "--phone",
            "1",
            "--frequency",
            "10",
            "--last-contacted",
            "2024-01-01T00:00:00Z",
        ],
    );

    let on_day = run_json(&dir, &["contact", "due", &id, "--at", "2024-01-11T00:00:00Z"]);
    assert_eq!(on_day["due"], true);
    assert_eq!(on_day["score"], 0);

    let day_before = run_json(&dir, &["contact", "due", &id, "--at", "2024-01-10T00:00:00Z"]);
    assert_eq!(day_before["due"], false);
}

#[test]
fn test_contact_add_rejects_zero_frequency() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(
        &dir,
        &["contact", "add", "Nobody", "--phone", "1", "--frequency", "0"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("frequencyDays"), "stderr: {stderr}");
}

#[test]
fn test_contact_update_and_delete() {
    let dir = TempDir::new().unwrap();
    let id = add_contact(&dir, &["Alex", "--phone", "1"]);

    let (code, stdout, _) = run_cli(
        &dir,
        &["contact", "update", &id, "--relationship", "family", "--priority", "5"],
    );
    assert_eq!(code, 0);
    let updated = json_after_first_line(&stdout);
    assert_eq!(updated["relationship"], "family");
    assert_eq!(updated["priority"], 5);

    let (code, _, _) = run_cli(&dir, &["contact", "delete", &id]);
    assert_eq!(code, 0);
    let (code, _, stderr) = run_cli(&dir, &["contact", "get", &id]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_settings_set_changes_default_count() {
    let dir = TempDir::new().unwrap();
    for i in 0..5 {
        add_contact(&dir, &[&format!("Person {i}"), "--phone", "1"]);
    }
    let settings = run_json(&dir, &["settings", "set", "--count-daily", "2"]);
    assert_eq!(settings["countDaily"], 2);

    let out = run_json(&dir, &["suggest", "--json"]);
    assert_eq!(out.as_array().unwrap().len(), 2);

    let (code, _, _) = run_cli(&dir, &["settings", "set", "--count-weekly", "0"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&dir, &["config", "get", "log.filter"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "warn");

    let (code, _, _) = run_cli(&dir, &["config", "set", "display.default_output", "json"]);
    assert_eq!(code, 0);
    // Table commands now print JSON without --json.
    let listed = run_json(&dir, &["contact", "list"]);
    assert!(listed.as_array().unwrap().is_empty());

    let (code, _, _) = run_cli(&dir, &["config", "set", "no.such.key", "x"]);
    assert_ne!(code, 0);
}

#[test]
fn test_templates_fill_name() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&dir, &["templates", "--name", "Jamie"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|l| l.contains("Jamie")));
}

#[test]
fn test_status_reports_counts() {
    let dir = TempDir::new().unwrap();
    run_json(&dir, &["seed"]);
    let status = run_json(&dir, &["status"]);
    assert_eq!(status["contacts"], 3);
    assert_eq!(status["interactions"], 0);
}

#[test]
fn test_templates_and_completions_leave_data_dir_untouched() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("fresh");

    for args in [&["templates"][..], &["completions", "bash"][..]] {
        let output = Command::new(env!("CARGO_BIN_EXE_reconnect"))
            .args(args)
            .env("RECONNECT_DATA_DIR", &data_dir)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute CLI command");
        assert!(output.status.success(), "{args:?} failed");
    }

    assert!(!data_dir.exists());
}

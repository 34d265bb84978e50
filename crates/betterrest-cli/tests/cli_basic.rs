//! Basic CLI E2E tests.
//!
//! Tests invoke the `betterrest` binary with an isolated HOME and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with `home` as the home directory and return output.
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_betterrest"))
        .args(args)
        .env("HOME", home)
        .env_remove("BETTERREST_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_calculate_defaults() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["calculate"]);
    assert_eq!(code, 0, "calculate failed");
    assert!(stdout.contains("Your ideal bedtime is"));
    assert!(stdout.contains("22:42"));
}

#[test]
fn test_calculate_explicit_inputs() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["calculate", "--wake", "06:00", "--sleep", "9", "--coffee", "0"],
    );
    assert_eq!(code, 0, "calculate failed");
    assert!(stdout.contains("21:00"));
}

#[test]
fn test_calculate_twelve_hour_clock() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["calculate", "--clock", "12h"]);
    assert_eq!(code, 0, "calculate failed");
    assert!(stdout.contains("10:42 PM"));
}

#[test]
fn test_calculate_json() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["calculate", "--json"]);
    assert_eq!(code, 0, "calculate --json failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["message"], "22:42");
    assert_eq!(parsed["wake_time"], "07:00");
    assert_eq!(parsed["coffee_intake"], 2);
}

#[test]
fn test_calculate_rejects_out_of_range_inputs() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["calculate", "--sleep", "13"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("out of range"));

    let (code, _, _) = run_cli(home.path(), &["calculate", "--coffee", "21"]);
    assert_ne!(code, 0);

    let (code, _, _) = run_cli(home.path(), &["calculate", "--wake", "7am"]);
    assert_ne!(code, 0);
}

#[test]
fn test_calculate_missing_model_reports_generic_error() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("missing.toml");
    let (code, stdout, stderr) =
        run_cli(home.path(), &["calculate", "--model", missing.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("There was an error calculating your bedtime."));
}

#[test]
fn test_calculate_missing_model_json() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("missing.toml");
    let (code, stdout, _) = run_cli(
        home.path(),
        &["calculate", "--json", "--model", missing.to_str().unwrap()],
    );
    assert_eq!(code, 1);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["success"], false);
    assert_eq!(parsed["title"], "Error");
}

#[test]
fn test_model_show_json() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["model", "show", "--json"]);
    assert_eq!(code, 0, "model show failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["name"], "SleepCalculator");
    assert_eq!(parsed["coffee_coefficient"], 540.0);
}

#[test]
fn test_model_export_then_use() {
    let home = tempfile::tempdir().unwrap();
    let (code, artifact, _) = run_cli(home.path(), &["model", "export"]);
    assert_eq!(code, 0);

    let path = home.path().join("exported.toml");
    std::fs::write(&path, artifact).unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["calculate", "--model", path.to_str().unwrap()],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("22:42"));
}

#[test]
fn test_config_set_changes_calculate_defaults() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["config", "set", "defaults.wake_time", "06:00"]);
    assert_eq!(code, 0, "config set failed");

    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "defaults.wake_time"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "06:00");

    let (_, stdout, _) = run_cli(home.path(), &["calculate"]);
    assert!(stdout.contains("21:42"));
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["config", "set", "defaults.coffee_intake", "99"]);
    assert_ne!(code, 0);

    let (code, _, _) = run_cli(home.path(), &["config", "set", "defaults.nope", "1"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_list_and_reset() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["display"]["clock"], "24h");

    let (code, _, _) = run_cli(home.path(), &["config", "reset"]);
    assert_eq!(code, 0);
}

/// Write `content` as the config file under `home`.
fn write_config(home: &Path, content: &str) {
    let dir = home.join(".config").join("betterrest");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
fn test_calculate_fails_on_unloadable_config() {
    let home = tempfile::tempdir().unwrap();
    write_config(
        home.path(),
        "[defaults]\nwake_time = \"06:00\"\nsleep_amount = 8.1\n\n[model]\npath = \"/nonexistent.toml\"\n",
    );

    let (code, stdout, stderr) = run_cli(home.path(), &["calculate"]);
    assert_eq!(code, 1, "calculate should not fall back to defaults");
    assert!(stdout.is_empty());
    assert!(stderr.contains("Configuration error"));
    assert!(stderr.contains("multiple of 0.25"));
}

#[test]
fn test_model_show_fails_on_unloadable_config() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "[display]\nclock = \"36h\"\n");

    let (code, _, stderr) = run_cli(home.path(), &["model", "show"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Configuration error"));

    // An explicit artifact does not need the config file.
    let (code, artifact, _) = run_cli(home.path(), &["model", "export"]);
    assert_eq!(code, 0);
    let path = home.path().join("exported.toml");
    std::fs::write(&path, artifact).unwrap();
    let (code, _, _) = run_cli(home.path(), &["model", "show", "--model", path.to_str().unwrap()]);
    assert_eq!(code, 0);
}

#[test]
fn test_config_set_echoes_and_path() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["config", "set", "display.clock", "12h"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "display.clock = 12h");

    let (code, stdout, _) = run_cli(home.path(), &["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("betterrest/config.toml"));
}

// modgate/tests/cli_integration_tests.rs
//! Command-line integration tests for the `modgate` binary.
//!
//! Each test spawns the real executable with `assert_cmd`, feeds it stdin or
//! temporary files, and checks stdout, stderr and the exit code (0 approved,
//! 2 rejected, 1 error). The process runs in a scratch directory with its
//! config home redirected so no user configuration leaks in.

use std::fs;
use std::path::Path;

use anyhow::Result;
#[allow(unused_imports)]
use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

fn modgate(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("modgate").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("MODGATE_ENABLED")
        .env_remove("MODGATE_CONFIG")
        .env_remove("MODGATE_ALLOW_DEBUG_CONTENT")
        .env_remove("RUST_LOG");
    cmd
}

fn strip_ansi(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(bytes)).to_string()
}

#[test]
fn test_check_clean_text_is_approved() -> Result<()> {
    let home = TempDir::new()?;
    let output = modgate(home.path()).arg("check").write_stdin("Have a lovely afternoon\n").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.starts_with("APPROVED"), "stdout was: {}", stdout);
    assert!(stdout.contains("Confidence: 1.00"));
    Ok(())
}

#[test]
fn test_check_profanity_is_rejected_with_exit_code_two() -> Result<()> {
    let home = TempDir::new()?;
    modgate(home.path())
        .arg("check")
        .write_stdin("what the shit")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("REJECTED"))
        .stdout(predicate::str::contains("Reason: Content contains inappropriate language"))
        .stdout(predicate::str::contains("Flags: profanity"));
    Ok(())
}

#[test]
fn test_check_auto_clean_approves_masked_text() -> Result<()> {
    let home = TempDir::new()?;
    modgate(home.path())
        .args(["check", "--auto-clean"])
        .write_stdin("what the shit")
        .assert()
        .success()
        .stdout(predicate::str::contains("APPROVED"))
        .stdout(predicate::str::contains("Cleaned: what the ****"));
    Ok(())
}

#[test]
fn test_check_json_output() -> Result<()> {
    let home = TempDir::new()?;
    let output = modgate(home.path())
        .args(["check", "--json"])
        .write_stdin("Reach me at jane.doe@example.com")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["approved"], true);
    assert_eq!(value["confidence"], 1.0);
    assert_eq!(value["flags"], serde_json::json!(["personal_info"]));
    assert_eq!(value["personalInfo"], serde_json::json!(["email"]));
    Ok(())
}

#[test]
fn test_check_layer_switches() -> Result<()> {
    let home = TempDir::new()?;
    modgate(home.path())
        .args(["check", "--no-profanity"])
        .write_stdin("what the shit")
        .assert()
        .success();
    modgate(home.path())
        .args(["check", "--no-pii"])
        .write_stdin("Reach me at jane.doe@example.com")
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_disabled_flag_and_env_override() -> Result<()> {
    let home = TempDir::new()?;
    modgate(home.path())
        .args(["--disabled", "check"])
        .write_stdin("what the shit")
        .assert()
        .success()
        .stdout(predicate::str::contains("APPROVED"));
    modgate(home.path())
        .arg("check")
        .env("MODGATE_ENABLED", "false")
        .write_stdin("what the shit")
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_check_empty_input_is_an_error() -> Result<()> {
    let home = TempDir::new()?;
    modgate(home.path())
        .arg("check")
        .write_stdin("   \n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("content is required"));
    Ok(())
}

#[test]
fn test_check_reads_input_file() -> Result<()> {
    let home = TempDir::new()?;
    let input = home.path().join("post.txt");
    fs::write(&input, "BUY NOW!!! THIS IS THE BEST DEAL EVER!!!")?;
    modgate(home.path())
        .args(["check", "--input"])
        .arg(&input)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Flags: spam"));
    Ok(())
}

#[test]
fn test_check_custom_words() -> Result<()> {
    let home = TempDir::new()?;
    modgate(home.path())
        .args(["check", "--add-word", "frak"])
        .write_stdin("frak this")
        .assert()
        .code(2);
    modgate(home.path())
        .args(["check", "--remove-word", "damn"])
        .write_stdin("damn it")
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_config_file_and_discovered_config() -> Result<()> {
    let home = TempDir::new()?;
    let config = home.path().join("custom.yaml");
    fs::write(&config, "dictionary:\n  extra_words:\n    - frak\n  placeholder: \"#\"\n")?;
    modgate(home.path())
        .args(["--config"])
        .arg(&config)
        .args(["check", "--auto-clean"])
        .write_stdin("frak this")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned: #### this"));

    fs::write(home.path().join("modgate.yaml"), "enabled: false\n")?;
    modgate(home.path())
        .arg("check")
        .write_stdin("what the shit")
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_invalid_config_file_fails() -> Result<()> {
    let home = TempDir::new()?;
    let config = home.path().join("bad.yaml");
    fs::write(&config, "limits:\n  max_len: 0\n")?;
    modgate(home.path())
        .arg("--config")
        .arg(&config)
        .arg("check")
        .write_stdin("hello")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_len"));
    Ok(())
}

#[test]
fn test_profile_reports_every_issue() -> Result<()> {
    let home = TempDir::new()?;
    let output = modgate(home.path())
        .args(["profile", "--name", "shit", "--bio", "Gardener and reader", "--website", "not a url"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("name: Content contains inappropriate language"));
    assert!(stdout.contains("website: Invalid URL format"));
    assert!(!stdout.contains("bio:"));
    Ok(())
}

#[test]
fn test_profile_json_approved() -> Result<()> {
    let home = TempDir::new()?;
    let output = modgate(home.path())
        .args(["profile", "--name", "Jane", "--website", "https://example.com", "--json"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["approved"], true);
    assert_eq!(value["issues"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_fields_stop_at_first_rejection() -> Result<()> {
    let home = TempDir::new()?;
    let output = modgate(home.path())
        .args(["fields", "-f", "title=Weekend plans", "-f", "body=what the shit", "-f", "tags=fun"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("Issue: body: Content contains inappropriate language"));
    assert!(stdout.contains("skipped"));
    Ok(())
}

#[test]
fn test_fields_auto_clean_json() -> Result<()> {
    let home = TempDir::new()?;
    let output = modgate(home.path())
        .args(["fields", "--auto-clean", "--json", "-f", "title=well damn", "-f", "body=fine"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["fields"][0]["value"], "well ****");
    assert_eq!(value["fields"][1]["value"], "fine");
    Ok(())
}

#[test]
fn test_debug_logs_redact_content() -> Result<()> {
    let home = TempDir::new()?;
    let output = modgate(home.path())
        .args(["--debug", "check"])
        .write_stdin("zyxwvu shit")
        .output()?;

    let stderr = strip_ansi(&output.stderr);
    assert!(stderr.contains("[CONTENT sha256:"), "stderr was: {}", stderr);
    assert!(!stderr.contains("zyxwvu"));
    Ok(())
}

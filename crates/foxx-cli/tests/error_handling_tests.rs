//! Tests for error reporting and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn foxx(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("foxx").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_unknown_license_is_not_found() {
    let temp = TempDir::new().unwrap();
    foxx(&temp)
        .args(["init", "svc", "--license-file", "--license", "WTFPL"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("WTFPL"))
        .stderr(predicate::str::contains("foxx licenses"));

    assert!(!temp.path().join("svc").exists());
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    foxx(&temp)
        .args(["-c", "absent.toml", "licenses"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_asset_directory_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    foxx(&temp)
        .args(["licenses", "--assets", "nowhere"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_invalid_answers_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("answers.json"), r#"{ "name": 42 }"#).unwrap();

    foxx(&temp)
        .args(["init", "--answers", "answers.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid answers file"))
        .stderr(predicate::str::contains("engineVersion"));
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    foxx(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_shows_cause() {
    let temp = TempDir::new().unwrap();
    foxx(&temp)
        .args(["-v", "init", "--answers", "missing.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Caused by"));
}

#[test]
fn test_usage_error_exit_code() {
    let temp = TempDir::new().unwrap();
    foxx(&temp)
        .args(["init", "--no-such-flag"])
        .assert()
        .failure()
        .code(2);
}

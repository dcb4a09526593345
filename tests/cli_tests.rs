//! CLI integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ENV_VARS: [&str; 5] = [
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_CHAT_ID",
    "WEBHOOK_SECRET",
    "PORT",
    "HOST",
];

/// The binary, run from an empty directory with a clean environment.
fn mintwatch(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("mintwatch");
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn fixture_path() -> String {
    format!(
        "{}/tests/fixtures/helius_batch.json",
        env!("CARGO_MANIFEST_DIR")
    )
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    mintwatch(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mintwatch"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    mintwatch(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn check_fails_listing_missing_variables() {
    let dir = TempDir::new().unwrap();
    mintwatch(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TELEGRAM_BOT_TOKEN"))
        .stderr(predicate::str::contains("TELEGRAM_CHAT_ID"));
}

#[test]
fn run_exits_nonzero_without_credentials() {
    let dir = TempDir::new().unwrap();
    mintwatch(&dir)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required environment variables"));
}

#[test]
fn check_succeeds_with_credentials() {
    let dir = TempDir::new().unwrap();
    mintwatch(&dir)
        .arg("check")
        .env("TELEGRAM_BOT_TOKEN", "123:abc")
        .env("TELEGRAM_CHAT_ID", "-100123")
        .env("PORT", "8080")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:8080"))
        .stdout(predicate::str::contains("WEBHOOK_SECRET not set"));
}

#[test]
fn check_rejects_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("mintwatch.toml"), "[logging]\nformat = \"xml\"\n").unwrap();

    mintwatch(&dir)
        .arg("check")
        .env("TELEGRAM_BOT_TOKEN", "123:abc")
        .env("TELEGRAM_CHAT_ID", "-100123")
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.format"));
}

#[test]
fn normalize_prints_mints_and_skips() {
    let dir = TempDir::new().unwrap();
    mintwatch(&dir)
        .args(["normalize", &fixture_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Okay Bear #1234"))
        .stdout(predicate::str::contains("token mint with supply > 1"))
        .stdout(predicate::str::contains("Mints"));
}

#[test]
fn normalize_json_emits_one_line_per_record() {
    let dir = TempDir::new().unwrap();
    let output = mintwatch(&dir)
        .args(["normalize", "--json", &fixture_path()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let kinds: Vec<String> = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|v| v["type"].as_str().map(str::to_owned))
        .filter(|kind| kind == "mint" || kind == "skipped")
        .collect();

    assert_eq!(kinds, vec!["mint", "skipped", "skipped", "mint"]);
}

#[test]
fn normalize_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    mintwatch(&dir)
        .args(["normalize", "does-not-exist.json"])
        .assert()
        .failure();
}

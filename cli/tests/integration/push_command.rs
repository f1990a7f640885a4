//! End-to-end tests for `gonut push` against a fake `cf` executable.
//!
//! The fake `cf` appends every invocation to `$FAKE_CF_LOG`, answers the
//! GUID and droplet queries, and fails the sub-command named in
//! `$FAKE_CF_FAIL`.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FAKE_CF: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_CF_LOG"
if [ "$1" = "$FAKE_CF_FAIL" ]; then
  echo "FAILED"
  echo "fake cf: $1 refused"
  exit 1
fi
case "$1" in
  app) echo "0f3c2b1a-1111-2222-3333-444455556666" ;;
  curl) echo '{"buildpacks":[{"name":"staticfile_buildpack"}],"stack":"cflinuxfs4"}' ;;
  *) echo "OK" ;;
esac
"#;

/// Write the fake `cf` once per test binary.
fn fake_cf() -> &'static Path {
    static DIR: OnceLock<TempDir> = OnceLock::new();
    let dir = DIR.get_or_init(|| {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cf");
        std::fs::write(&path, FAKE_CF).expect("write fake cf");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake cf");
        dir
    });
    dir.path()
}

/// Per-test workspace holding the config file and the invocation log.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(extra_yaml: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let cf = fake_cf().join("cf");
        let yaml = format!("cf:\n  binary: {}\n  timeout_secs: 30\n{extra_yaml}", cf.display());
        std::fs::write(dir.path().join("config.yaml"), yaml).expect("write config");
        Self { dir }
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("cf.log")
    }

    fn log(&self) -> String {
        std::fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    fn gonut(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gonut"));
        cmd.env("NO_COLOR", "1")
            .env("GONUT_CONFIG", self.dir.path().join("config.yaml"))
            .env("FAKE_CF_LOG", self.log_path())
            .env_remove("FAKE_CF_FAIL")
            .env_remove("GONUT_DELETE")
            .env_remove("GONUT_SUMMARY")
            .env_remove("GONUT_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}

// --- Successful pushes ---

#[test]
fn test_push_short_summary() {
    let ws = Workspace::new("");
    ws.gonut()
        .args(["push", "staticfile"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Successfully pushed Staticfile sample app in",
        ))
        .stdout(predicate::str::ends_with(".\n"));

    let log = ws.log();
    assert!(log.starts_with("target\n"), "log:\n{log}");
    assert!(log.contains("create-app gonut-staticfile-app-"), "log:\n{log}");
    assert!(log.contains("--no-start"), "log:\n{log}");
    assert!(log.contains("delete gonut-staticfile-app-"), "log:\n{log}");
}

#[test]
fn test_push_full_summary_lists_phases_buildpack_and_stack() {
    let ws = Workspace::new("");
    ws.gonut()
        .args(["push", "staticfile", "--summary", "full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  initialisation: "))
        .stdout(predicate::str::contains("        starting: "))
        .stdout(predicate::str::contains("       buildpack: staticfile_buildpack"))
        .stdout(predicate::str::contains("           stack: cflinuxfs4"));
}

#[test]
fn test_push_quiet_summary_prints_nothing() {
    let ws = Workspace::new("");
    ws.gonut()
        .args(["push", "php", "-s", "quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_push_alias_with_never_keeps_app() {
    let ws = Workspace::new("");
    ws.gonut()
        .args(["push", "static", "-d", "never"])
        .assert()
        .success();

    let log = ws.log();
    assert!(log.contains("create-app gonut-staticfile-app-"), "log:\n{log}");
    assert!(!log.contains("delete"), "log:\n{log}");
}

#[test]
fn test_config_file_defaults_apply() {
    let ws = Workspace::new("push:\n  delete: never\n  summary: full\n");
    ws.gonut()
        .args(["push", "golang"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buildpack:"));
    assert!(!ws.log().contains("delete"));
}

#[test]
fn test_env_overrides_config_file() {
    let ws = Workspace::new("push:\n  summary: full\n");
    ws.gonut()
        .env("GONUT_SUMMARY", "quiet")
        .args(["push", "golang"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_push_all_pushes_every_app_in_order() {
    let ws = Workspace::new("");
    ws.gonut()
        .args(["push", "all", "-s", "quiet"])
        .assert()
        .success();

    let log = ws.log();
    let creates: Vec<&str> = log
        .lines()
        .filter_map(|l| l.strip_prefix("create-app "))
        .collect();
    let prefixes = [
        "gonut-golang-app-",
        "gonut-python-app-",
        "gonut-php-app-",
        "gonut-staticfile-app-",
        "gonut-swift-app-",
        "gonut-nodejs-app-",
        "gonut-ruby-sinatra-app-",
    ];
    assert_eq!(creates.len(), prefixes.len(), "log:\n{log}");
    for (name, prefix) in creates.iter().zip(prefixes) {
        assert!(name.starts_with(prefix), "{name} should start with {prefix}");
    }
}

// --- Failures ---

#[test]
fn test_invalid_delete_setting_fails_before_any_cf_call() {
    let ws = Workspace::new("");
    ws.gonut()
        .args(["push", "golang", "--delete", "sometimes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value for delete: sometimes"));
    assert!(!ws.log_path().exists(), "cf must not be invoked");
}

#[test]
fn test_invalid_summary_in_config_file_fails_before_any_cf_call() {
    let ws = Workspace::new("push:\n  summary: oneline\n");
    ws.gonut()
        .args(["push", "all"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value for summary: oneline"));
    assert!(!ws.log_path().exists(), "cf must not be invoked");
}

#[test]
fn test_failed_start_reports_error_and_cleans_up() {
    let ws = Workspace::new("");
    ws.gonut()
        .env("FAKE_CF_FAIL", "start")
        .args(["push", "nodejs"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Successfully").not())
        .stderr(predicate::str::contains(
            "Error: Failed to push NodeJS sample app",
        ))
        .stderr(predicate::str::contains("fake cf: start refused"));

    assert!(ws.log().contains("delete gonut-nodejs-app-"));
}

#[test]
fn test_push_all_stops_at_first_failure() {
    let ws = Workspace::new("");
    ws.gonut()
        .env("FAKE_CF_FAIL", "stage")
        .args(["push", "all", "-d", "on-success"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to push Golang sample app"));

    let log = ws.log();
    assert!(log.contains("gonut-golang-app-"), "log:\n{log}");
    assert!(!log.contains("gonut-python-app-"), "log:\n{log}");
    assert!(!log.contains("delete"), "log:\n{log}");
}

#[test]
fn test_missing_cf_binary_is_push_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.yaml");
    std::fs::write(&config, "cf:\n  binary: /nonexistent/gonut-cf\n").expect("write config");

    Command::new(assert_cmd::cargo::cargo_bin!("gonut"))
        .env("NO_COLOR", "1")
        .env("GONUT_CONFIG", &config)
        .env_remove("GONUT_DELETE")
        .env_remove("GONUT_SUMMARY")
        .args(["push", "python", "-d", "never"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to push Python sample app"));
}

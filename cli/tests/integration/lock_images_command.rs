//! Integration tests for `lock-base-images` against a fake `crane` script.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

const DEMO: &str = r#"{"demo": {"registry": "r", "tagRegex": "^v(\\d+)$"}}"#;

fn zeros() -> String {
    format!("sha256:{}", "0".repeat(64))
}

/// Write an executable shell script standing in for `crane`.
fn fake_crane(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("crane");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    let mut perms = std::fs::metadata(&path).expect("metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod");
    path
}

fn lock_base_images(crane: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lock-base-images"));
    cmd.env_remove("LOCK_IMAGES_TIMEOUT")
        .env_remove("RUST_LOG")
        .arg("--crane")
        .arg(crane);
    cmd
}

fn demo_registry() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let crane = fake_crane(
        dir.path(),
        &format!(
            r#"case "$1 $2" in
  "ls r") printf 'v1\nv3\nv2\n' ;;
  "digest r:v3") echo {} ;;
  *) echo "unexpected: $*" >&2; exit 1 ;;
esac"#,
            zeros()
        ),
    );
    (dir, crane)
}

#[test]
#[serial]
fn test_demo_end_to_end() {
    let (_dir, crane) = demo_registry();

    lock_base_images(&crane)
        .write_stdin(DEMO)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{{\n  \"demo\": \"r:v3@{}\"\n}}\n",
            zeros()
        )));
}

#[test]
#[serial]
fn test_crane_from_environment() {
    let (_dir, crane) = demo_registry();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lock-base-images"));
    cmd.env("LOCK_IMAGES_CRANE", &crane)
        .write_stdin(DEMO)
        .assert()
        .success()
        .stdout(predicate::str::contains("r:v3@sha256:"));
}

#[test]
#[serial]
fn test_tool_failure_exits_nonzero_with_stderr() {
    let dir = tempfile::tempdir().expect("tempdir");
    let crane = fake_crane(dir.path(), "echo 'GET https://r: UNAUTHORIZED' >&2; exit 1");

    lock_base_images(&crane)
        .write_stdin(DEMO)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("UNAUTHORIZED"));
}

#[test]
#[serial]
fn test_bad_digest_names_reference() {
    let dir = tempfile::tempdir().expect("tempdir");
    let crane = fake_crane(
        dir.path(),
        r#"case "$1" in
  ls) echo v1 ;;
  digest) echo not-a-digest ;;
esac"#,
    );

    lock_base_images(&crane)
        .write_stdin(DEMO)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unexpected digest for r:v1: not-a-digest"));
}

#[test]
#[serial]
fn test_no_matching_tag_exits_nonzero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let crane = fake_crane(dir.path(), "echo latest");

    lock_base_images(&crane)
        .write_stdin(DEMO)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no tag in r matches"));
}

#[test]
#[serial]
fn test_malformed_stdin_exits_nonzero() {
    let (_dir, crane) = demo_registry();

    lock_base_images(&crane)
        .write_stdin("{\"demo\": ")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parsing image constraints"));
}

#[test]
#[serial]
fn test_timeout_kills_hung_tool() {
    let dir = tempfile::tempdir().expect("tempdir");
    let crane = fake_crane(dir.path(), "exec sleep 30");

    lock_base_images(&crane)
        .args(["--timeout", "1"])
        .write_stdin(DEMO)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
#[serial]
fn test_empty_object_prints_empty_object() {
    let (_dir, crane) = demo_registry();

    lock_base_images(&crane)
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::diff("{}\n"));
}

//! Integration tests for argument parsing of both binaries.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;

fn gen_version_vars() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gen-version-vars"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn lock_base_images() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lock-base-images"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
#[serial]
fn test_gen_version_vars_help() {
    gen_version_vars()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("poetry.lock"))
        .stdout(predicate::str::contains("--lockfile"));
}

#[test]
#[serial]
fn test_lock_base_images_help() {
    lock_base_images()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--crane"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
#[serial]
fn test_version_flag() {
    for mut cmd in [gen_version_vars(), lock_base_images()] {
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
#[serial]
fn test_unknown_flag_is_usage_error() {
    gen_version_vars()
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
#[serial]
fn test_non_numeric_timeout_is_usage_error() {
    lock_base_images()
        .args(["--timeout", "soon"])
        .write_stdin("{}")
        .assert()
        .code(2);
}

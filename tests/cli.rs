//! CLI argument parsing and validation tests — no network I/O.
//!
//! These tests verify that invalid arguments are rejected before any
//! cassette or live adapter is consulted.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("postergen").unwrap();
    // Keep the environment hermetic: no user config, no leaked key.
    cmd.env("POSTERGEN_CONFIG", "/nonexistent/postergen-config.toml")
        .env_remove("PEXELS_API_KEY")
        .env_remove("POSTERGEN_REPLAY")
        .env_remove("POSTERGEN_REC");
    cmd
}

#[test]
fn missing_name_exits_with_error() {
    // No positional event name → resolve_name() returns an error
    cmd().assert().failure().stderr(predicate::str::contains("Provide an event name"));
}

#[test]
fn count_zero_exits_with_error() {
    cmd()
        .args(["--count", "0", "Summer Gala"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported count"));
}

#[test]
fn count_above_five_exits_with_error() {
    cmd()
        .args(["--count", "6", "Summer Gala"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported count"));
}

#[test]
fn page_zero_exits_with_error() {
    cmd()
        .args(["--page", "0", "Summer Gala"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page must be at least 1"));
}

#[test]
fn missing_api_key_exits_with_error() {
    // Valid arguments but neither a key nor a cassette → live mode refuses
    cmd()
        .args(["Summer Gala"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Pexels API key"));
}

//! Smoke tests for the pickc binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::process::Command;

fn pickc(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pickc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run pickc")
}

#[test]
fn run_prints_every_demo() {
    let output = pickc(&["run"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in ["arrays", "nested", "swap", "dynamic-keys"] {
        assert!(stdout.contains(&format!("== {name}:")), "missing {name}");
    }
    assert!(stdout.contains("remaining = [\"🍌\", \"🍓\"]"));
}

#[test]
fn filter_limits_demos() {
    let output = pickc(&["run", "--filter=rename"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("username = \"Francisco\""));
    assert!(!stdout.contains("== arrays"));
}

#[test]
fn unknown_command_fails() {
    let output = pickc(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown command or option 'frobnicate'"));
}

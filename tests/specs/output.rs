// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for report formats and color.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;
use predicates::str::contains;

/// Piped output is uncolored by default
#[test]
fn piped_output_has_no_color() {
    let project = Project::new();
    project.fixture("a", "echo a\na\n");

    project
        .golden()
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}

/// `--color=always` colors pass lines
#[test]
fn color_always_emits_escapes() {
    let project = Project::new();
    project.fixture("a", "echo a\na\n");

    project
        .golden()
        .arg("--color=always")
        .assert()
        .success()
        .stdout(contains("\x1b["))
        .stdout(contains("✔ a: Test passed"));
}

/// `--output json` emits one event per line
#[test]
fn json_output_emits_events() {
    let project = Project::new();
    project
        .fixture("1-pass", "echo hello\nhello\n")
        .fixture("2-fail", "echo hi\nbye\n");

    let output = project.golden().args(["--output", "json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let events: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(kinds, ["setup", "pass", "fail", "summary"]);
    assert_eq!(events[0]["tool"], "pc");
    assert_eq!(events[1]["name"], "1-pass");
    assert_eq!(events[2]["name"], "2-fail");
    assert_eq!(events[2]["expected"], "bye");
    assert_eq!(events[2]["actual"], "hi");
    assert_eq!(events[3]["passed"], 1);
    assert_eq!(events[3]["failed"], 1);
}

/// `--verbose` writes configuration to stderr only
#[test]
fn verbose_writes_to_stderr() {
    let project = Project::new();
    project.fixture("a", "echo a\na\n");

    project
        .golden()
        .arg("--verbose")
        .assert()
        .success()
        .stderr(contains("Configuration:"))
        .stderr(contains("Tool: pc"))
        .stderr(contains("Fixtures (1):"))
        .stdout(contains("Configuration:").not());
}

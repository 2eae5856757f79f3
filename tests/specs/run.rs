// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for running fixtures.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;
use predicates::str::contains;

// =============================================================================
// Pass / fail
// =============================================================================

/// `echo hello` with expected `hello` passes
#[test]
fn matching_output_passes() {
    let project = Project::new();
    project.fixture("greeting", "echo hello\nhello");

    project
        .golden()
        .arg("--no-color")
        .assert()
        .success()
        .stdout(contains("✔ greeting: Test passed"))
        .stdout(contains("Passed: 1\nFailed: 0\n"));
}

/// `echo hi` with expected `bye` fails with a directional diff
#[test]
fn mismatched_output_fails_with_diff() {
    let project = Project::new();
    project.fixture("greeting", "echo hi\nbye");

    project
        .golden()
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(contains("✖ greeting: Test failed"))
        .stdout(contains("Difference (Expected vs Actual):"))
        .stdout(contains("--- Expected\n+++ Actual\n"))
        .stdout(contains("-bye\n+hi\n"))
        .stdout(contains("Passed: 0\nFailed: 1\n"));
}

/// Trailing blank lines and spaces are not significant
#[test]
fn trailing_whitespace_is_ignored() {
    let project = Project::new();
    project.fixture("padded", "printf 'hello   \\n\\n\\n'\nhello\n\n");

    project
        .golden()
        .assert()
        .success()
        .stdout(contains("Passed: 1"));
}

/// Internal whitespace differences fail
#[test]
fn internal_whitespace_is_significant() {
    let project = Project::new();
    project.fixture("spaced", "echo 'a  b'\na b\n");

    project.golden().assert().code(1).stdout(contains("Failed: 1"));
}

/// Mismatches do not stop later fixtures
#[test]
fn run_continues_after_mismatch() {
    let project = Project::new();
    project
        .fixture("1-wrong", "echo one\nuno\n")
        .fixture("2-right", "echo two\ntwo\n");

    project
        .golden()
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(contains("✔ 2-right: Test passed"))
        .stdout(contains("Passed: 1\nFailed: 1\n"));
}

/// Fixtures run in sorted name order
#[test]
fn fixtures_run_in_sorted_order() {
    let project = Project::new();
    project
        .fixture("b", "echo b\nb")
        .fixture("a", "echo a\na")
        .fixture("c", "echo c\nc");

    let output = project.golden().arg("--no-color").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let a = stdout.find("✔ a:").unwrap();
    let b = stdout.find("✔ b:").unwrap();
    let c = stdout.find("✔ c:").unwrap();
    assert!(a < b && b < c, "unexpected order:\n{stdout}");
}

/// An empty tests directory is a successful run with zero counts
#[test]
fn empty_tests_dir_succeeds() {
    let project = Project::new();

    project
        .golden()
        .arg("--no-color")
        .assert()
        .success()
        .stdout(contains("Test Summary\nPassed: 0\nFailed: 0\n"));
}

/// Fixture commands may use pipes
#[test]
fn shell_features_are_available() {
    let project = Project::new();
    project.fixture("pipe", "printf 'b\\na\\n' | sort\na\nb\n");

    project.golden().assert().success();
}

// =============================================================================
// Tool resolution
// =============================================================================

/// The tool under test is announced before any fixture
#[test]
fn announces_resolved_tool() {
    let project = Project::new();
    let expected = project.path().join("zig-out/bin/pc");

    let output = project.golden().output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with(&format!("Using pc: {}\n", expected.display())),
        "stdout was:\n{stdout}"
    );
}

/// The freshly built tool shadows one later on PATH
#[test]
fn build_output_dir_comes_first_on_path() {
    let project = Project::new();
    project.tool("system", "pc", "#!/bin/sh\necho system\n");
    project.fixture("which-pc", "pc hello\npc hello\n");

    let path = std::env::join_paths(
        std::iter::once(project.path().join("system"))
            .chain(std::env::split_paths(&std::env::var_os("PATH").unwrap_or_default())),
    )
    .unwrap();

    project.golden().env("PATH", path).assert().success();
}

/// A missing tool aborts before any fixture runs
#[test]
fn missing_tool_aborts() {
    let project = Project::empty();
    project.fixture("a", "echo a\na\n");

    project
        .golden()
        .arg("--tool")
        .arg("golden-missing-tool")
        .assert()
        .code(1)
        .stdout(contains("Using").not())
        .stdout(contains("Test Summary").not())
        .stderr(contains("golden-missing-tool"));
}

// =============================================================================
// Fatal errors
// =============================================================================

/// A command exiting non-zero aborts the whole run without a summary
#[test]
fn failing_command_aborts_run() {
    let project = Project::new();
    project
        .fixture("1-ok", "echo ok\nok\n")
        .fixture("2-broken", "exit 1\n")
        .fixture("3-never", "echo never\nnever\n");

    project
        .golden()
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(contains("✔ 1-ok: Test passed"))
        .stdout(contains("3-never").not())
        .stdout(contains("Test Summary").not())
        .stderr(contains("Command 'exit 1' returned non-zero exit status"));
}

/// A missing tests directory aborts
#[test]
fn missing_tests_dir_aborts() {
    let project = Project::empty();
    project.tool("zig-out/bin", "pc", "#!/bin/sh\n");

    project
        .golden()
        .assert()
        .code(1)
        .stdout(contains("Test Summary").not())
        .stderr(contains("tests"));
}

/// An empty fixture file aborts
#[test]
fn empty_fixture_aborts() {
    let project = Project::new();
    project.fixture("blank", "");

    project
        .golden()
        .assert()
        .code(1)
        .stdout(contains("Test Summary").not())
        .stderr(contains("fixture is empty"));
}

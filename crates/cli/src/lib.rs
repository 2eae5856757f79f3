// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file test harness.
//!
//! Each fixture file holds a shell command on its first line and the
//! expected standard output after it. The harness runs the commands with a
//! freshly built tool first on `PATH`, compares the output, and reports a
//! unified diff for every mismatch.

pub mod cli;
pub mod color;
pub mod config;
pub mod diff;
pub mod discovery;
pub mod error;
pub mod fixture;
pub mod outcome;
pub mod report;
pub mod runner;
pub mod search_path;
pub mod shell;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-fixture outcomes and the run summary.

use crate::error::ExitCode;

/// Result of running one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub success: bool,
    /// Expected output, trailing whitespace removed.
    pub expected: String,
    /// Actual output, trailing whitespace removed.
    pub actual: String,
}

impl CaseOutcome {
    /// Compare outputs after trimming trailing whitespace from both.
    pub fn compare(expected: &str, actual: &str) -> Self {
        let expected = expected.trim_end();
        let actual = actual.trim_end();
        Self {
            success: expected == actual,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Pass/fail counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, success: bool) {
        if success {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.failed > 0 {
            ExitCode::Failure
        } else {
            ExitCode::Success
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;

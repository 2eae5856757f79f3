// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON lines report output.

use std::io::Write;
use std::path::Path;

use serde_json::json;

use super::Reporter;
use crate::error::Result;
use crate::fixture::Fixture;
use crate::outcome::{CaseOutcome, RunSummary};

/// Writes one JSON object per event, newline-delimited.
pub struct JsonReporter<W> {
    writer: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, event: serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &event).map_err(std::io::Error::from)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn setup(&mut self, tool: &str, resolved: &Path) -> Result<()> {
        self.emit(json!({
            "event": "setup",
            "tool": tool,
            "path": resolved.display().to_string(),
        }))
    }

    fn pass(&mut self, fixture: &Fixture) -> Result<()> {
        self.emit(json!({
            "event": "pass",
            "name": fixture.name,
            "command": fixture.command,
        }))
    }

    fn fail(&mut self, fixture: &Fixture, outcome: &CaseOutcome, diff: &str) -> Result<()> {
        self.emit(json!({
            "event": "fail",
            "name": fixture.name,
            "command": fixture.command,
            "expected": outcome.expected,
            "actual": outcome.actual,
            "diff": diff,
        }))
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        self.emit(json!({
            "event": "summary",
            "passed": summary.passed,
            "failed": summary.failed,
        }))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

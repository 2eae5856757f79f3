// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;
use std::path::Path;

use termcolor::{ColorSpec, WriteColor};

use super::Reporter;
use crate::color::scheme;
use crate::diff::{LineKind, classify_lines};
use crate::error::Result;
use crate::fixture::Fixture;
use crate::outcome::{CaseOutcome, RunSummary};

const PASS_MARK: &str = "✔";
const FAIL_MARK: &str = "✖";

/// Human-readable reporter.
pub struct TextReporter<W> {
    writer: W,
}

impl<W: WriteColor> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write `text` in `spec`, then reset.
    fn colored(&mut self, spec: &ColorSpec, text: &str) -> Result<()> {
        self.writer.set_color(spec)?;
        write!(self.writer, "{}", text)?;
        self.writer.reset()?;
        Ok(())
    }

    fn write_diff(&mut self, diff: &str) -> Result<()> {
        for (kind, line) in classify_lines(diff) {
            let spec = match kind {
                LineKind::Header => scheme::diff_header(),
                LineKind::Hunk => scheme::diff_hunk(),
                LineKind::Removed => scheme::diff_removed(),
                LineKind::Added => scheme::diff_added(),
                LineKind::Context => {
                    write!(self.writer, "{}", line)?;
                    continue;
                }
            };
            // Keep the terminator outside the colored span
            let body = line.strip_suffix('\n').unwrap_or(line);
            self.colored(&spec, body)?;
            if body.len() < line.len() {
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }
}

impl<W: WriteColor> Reporter for TextReporter<W> {
    fn setup(&mut self, tool: &str, resolved: &Path) -> Result<()> {
        writeln!(self.writer, "Using {}: {}", tool, resolved.display())?;
        self.writer.flush()?;
        Ok(())
    }

    fn pass(&mut self, fixture: &Fixture) -> Result<()> {
        let line = format!("{} {}: Test passed", PASS_MARK, fixture.name);
        self.colored(&scheme::pass(), &line)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn fail(&mut self, fixture: &Fixture, _outcome: &CaseOutcome, diff: &str) -> Result<()> {
        let line = format!("{} {}: Test failed", FAIL_MARK, fixture.name);
        self.colored(&scheme::fail(), &line)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "\nDifference (Expected vs Actual):")?;
        self.write_diff(diff)?;
        writeln!(self.writer)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.writer)?;
        self.colored(&scheme::title(), "Test Summary")?;
        writeln!(self.writer)?;

        write!(self.writer, "Passed: ")?;
        self.colored(&scheme::pass(), &summary.passed.to_string())?;
        writeln!(self.writer)?;

        write!(self.writer, "Failed: ")?;
        self.colored(&scheme::fail(), &summary.failed.to_string())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run reporting.
//!
//! The runner announces each fixture through a [`Reporter`]. Text output is
//! colored for humans; JSON output is one event object per line.

mod json;
mod text;

use std::path::Path;

use termcolor::{ColorChoice, StandardStream};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::fixture::Fixture;
use crate::outcome::{CaseOutcome, RunSummary};

pub use json::JsonReporter;
pub use text::TextReporter;

/// Receives run events in order: `setup`, then `pass`/`fail` once per
/// fixture, then `summary` unless the run aborted.
pub trait Reporter {
    /// Announce the executable fixture commands will invoke.
    fn setup(&mut self, tool: &str, resolved: &Path) -> Result<()>;

    fn pass(&mut self, fixture: &Fixture) -> Result<()>;

    /// `diff` is the rendered unified diff from expected to actual.
    fn fail(&mut self, fixture: &Fixture, outcome: &CaseOutcome, diff: &str) -> Result<()>;

    fn summary(&mut self, summary: &RunSummary) -> Result<()>;
}

/// Create a reporter writing to stdout.
pub fn stdout_reporter(format: OutputFormat, color: ColorChoice) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(StandardStream::stdout(color))),
        OutputFormat::Json => Box::new(JsonReporter::new(std::io::stdout())),
    }
}

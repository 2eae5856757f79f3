// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential fixture runner.
//!
//! Fixtures run one at a time in the order given. A mismatch is recorded and
//! the run continues; any error aborts the run before the summary.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::diff;
use crate::error::Result;
use crate::fixture::Fixture;
use crate::outcome::{CaseOutcome, RunSummary};
use crate::report::Reporter;
use crate::search_path::SearchPath;
use crate::shell::{ExecContext, ShellInvoker};

/// Execution environment for a run.
#[derive(Debug, Clone)]
pub struct Environment {
    pub context: ExecContext,
    /// Resolved path of the tool under test.
    pub tool_path: PathBuf,
}

impl Environment {
    /// Put the build-output directory first on `inherited` and resolve the tool.
    pub fn prepare(settings: &Settings, inherited: &SearchPath) -> Result<Self> {
        let search_path = inherited.prepend(&settings.bin_dir);
        let tool_path = search_path.resolve(&settings.tool, &settings.root)?;
        tracing::debug!("resolved {} to {}", settings.tool, tool_path.display());

        Ok(Self {
            context: ExecContext {
                working_dir: settings.root.clone(),
                search_path,
            },
            tool_path,
        })
    }
}

/// Runs fixtures through a shell invoker.
pub struct Runner<'a> {
    invoker: &'a dyn ShellInvoker,
    context: &'a ExecContext,
}

impl<'a> Runner<'a> {
    pub fn new(invoker: &'a dyn ShellInvoker, context: &'a ExecContext) -> Self {
        Self { invoker, context }
    }

    /// Run one parsed fixture and compare its output.
    pub fn run_case(&self, fixture: &Fixture) -> Result<CaseOutcome> {
        let actual = self.invoker.capture(&fixture.command, self.context)?;
        Ok(CaseOutcome::compare(&fixture.expected, &actual))
    }

    /// Load, run and report every fixture, then the summary.
    pub fn run(&self, fixtures: &[PathBuf], reporter: &mut dyn Reporter) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for path in fixtures {
            self.run_path(path, reporter, &mut summary)?;
        }

        reporter.summary(&summary)?;
        Ok(summary)
    }

    fn run_path(
        &self,
        path: &Path,
        reporter: &mut dyn Reporter,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let fixture = Fixture::load(path)?;
        let outcome = self.run_case(&fixture)?;
        summary.record(outcome.success);

        if outcome.success {
            reporter.pass(&fixture)
        } else {
            let rendered = diff::unified(&outcome.expected, &outcome.actual);
            reporter.fail(&fixture, &outcome, &rendered)
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

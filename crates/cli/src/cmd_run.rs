// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: set up, discover, run, report.

use golden::cli::Cli;
use golden::config::{self, Settings};
use golden::discovery;
use golden::error::ExitCode;
use golden::report;
use golden::runner::{Environment, Runner};
use golden::search_path::SearchPath;
use golden::shell::SystemShell;
use golden::verbose::VerboseLogger;

/// Run every fixture and return the exit code for the summary.
///
/// Any error aborts before the summary is printed.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::new(cli.verbose);

    let loaded = config::locate(cli.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(&cli.overrides(), &loaded, &cwd);
    tracing::debug!(?settings, "resolved settings");
    verbose.settings(&settings);

    let mut reporter = report::stdout_reporter(cli.output, cli.color_choice());

    let env = Environment::prepare(&settings, &SearchPath::inherited())?;
    reporter.setup(&settings.tool, &env.tool_path)?;

    let fixtures = discovery::list_fixtures(&settings.tests_dir)?;
    verbose.fixtures(&fixtures);

    let shell = SystemShell::new(&settings.shell);
    let summary = Runner::new(&shell, &env.context).run(&fixtures, reporter.as_mut())?;
    tracing::debug!(passed = summary.passed, failed = summary.failed, "run finished");

    Ok(summary.exit_code())
}

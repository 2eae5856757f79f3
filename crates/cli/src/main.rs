// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use golden::cli::Cli;
use golden::config::defaults;
use golden::error::ExitCode;

mod cmd_run;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match cmd_run::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("golden: {err}");
            ExitCode::Failure.into()
        }
    }
}

/// Log to stderr, filtered by `GOLDEN_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(defaults::LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .without_time()
        .init();
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use termcolor::ColorChoice;

use crate::color::ColorMode;
use crate::config::Overrides;

/// Run golden-file fixtures against a freshly built binary
#[derive(Debug, Parser)]
#[command(name = "golden")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fixture directory [default: tests]
    #[arg(value_name = "TESTS_DIR")]
    pub tests: Option<PathBuf>,

    /// Build-output directory searched before PATH [default: zig-out/bin]
    #[arg(long, value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Executable under test [default: pc]
    #[arg(long, value_name = "NAME")]
    pub tool: Option<String>,

    /// Shell used to run fixture commands [default: sh]
    #[arg(long, value_name = "PATH")]
    pub shell: Option<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "GOLDEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Print resolved configuration and fixtures to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            tests: self.tests.clone(),
            bin_dir: self.bin_dir.clone(),
            tool: self.tool.clone(),
            shell: self.shell.clone(),
        }
    }

    pub fn color_choice(&self) -> ColorChoice {
        self.color.resolve(self.no_color)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

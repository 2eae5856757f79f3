// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color detection and the report color scheme.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// Color mode selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Resolve to a concrete choice, honoring `--no-color`.
    pub fn resolve(self, no_color: bool) -> ColorChoice {
        match self {
            ColorMode::Always => resolve_color(true, no_color),
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if std::io::stdout().is_terminal() => resolve_color(false, no_color),
            ColorMode::Auto => ColorChoice::Never,
        }
    }
}

/// Combine force/disable flags. Disabling always wins.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        // termcolor checks TERM and NO_COLOR
        ColorChoice::Auto
    }
}

/// Color specs used by the text reporter.
pub mod scheme {
    use super::*;

    /// Passing fixture line.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_intense(true);
        spec
    }

    /// Failing fixture line.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_intense(true);
        spec
    }

    /// Section titles ("Test Summary").
    pub fn title() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// `---`/`+++` diff headers.
    pub fn diff_header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// `@@` hunk ranges.
    pub fn diff_hunk() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Lines only in the expected output.
    pub fn diff_removed() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        spec
    }

    /// Lines only in the actual output.
    pub fn diff_added() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

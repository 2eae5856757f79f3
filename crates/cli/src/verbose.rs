// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose diagnostics for `--verbose`.
//!
//! Everything goes to stderr so the report on stdout stays clean.

use std::path::{Path, PathBuf};

use crate::config::Settings;

/// Verbose output logger. Writes to stderr when enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a line indented under the current section.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Print the resolved settings.
    pub fn settings(&self, settings: &Settings) {
        if !self.enabled {
            return;
        }
        self.section("Configuration");
        for line in settings_lines(settings) {
            self.log(&line);
        }
    }

    /// Print discovered fixture names.
    pub fn fixtures(&self, fixtures: &[PathBuf]) {
        if !self.enabled {
            return;
        }
        self.section(&format!("Fixtures ({})", fixtures.len()));
        for path in fixtures {
            self.log(&display_name(path));
        }
    }
}

/// Lines of the "Configuration" section.
pub fn settings_lines(settings: &Settings) -> Vec<String> {
    let config = match &settings.config_path {
        Some(path) => relative(path, &settings.root),
        None => "(defaults)".to_string(),
    };
    vec![
        format!("Config: {}", config),
        format!("Tests: {}", relative(&settings.tests_dir, &settings.root)),
        format!("Bin dir: {}", relative(&settings.bin_dir, &settings.root)),
        format!("Tool: {}", settings.tool),
        format!("Shell: {}", settings.shell.display()),
    ]
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;

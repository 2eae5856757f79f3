// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture files.
//!
//! A fixture is a plain text file: the first line is a shell command, the
//! remaining lines are the expected standard output of that command.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A parsed fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// File name, used when reporting.
    pub name: String,
    /// Path the fixture was read from.
    pub path: PathBuf,
    /// Shell command (first line, trimmed).
    pub command: String,
    /// Expected output (remaining lines, verbatim).
    pub expected: String,
}

impl Fixture {
    /// Read and parse the fixture at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadFixture {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse fixture content. Fails only when `content` has no lines at all.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let (command, expected) = split_fixture(content).ok_or_else(|| Error::EmptyFixture {
            path: path.to_path_buf(),
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            path: path.to_path_buf(),
            command: command.to_string(),
            expected: expected.to_string(),
        })
    }
}

/// Split content into `(command, expected)`.
///
/// Line terminators after the first line are kept as-is.
pub fn split_fixture(content: &str) -> Option<(&str, &str)> {
    if content.is_empty() {
        return None;
    }
    match content.find('\n') {
        Some(end) => Some((content[..end].trim(), &content[end + 1..])),
        None => Some((content.trim(), "")),
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;

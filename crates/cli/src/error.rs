// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and exit codes.
//!
//! Every variant of [`Error`] is fatal: it aborts the run before a summary is
//! printed. Output mismatches are not errors; they are recorded as failed
//! fixtures in the run summary.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every fixture passed.
    Success = 0,
    /// At least one fixture failed, or the run aborted.
    Failure = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Fatal harness errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("{tool}: {source}")]
    ToolNotFound {
        tool: String,
        #[source]
        source: which::Error,
    },

    #[error("{}: {source}", path.display())]
    TestDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    ReadFixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: fixture is empty, expected a command on the first line", path.display())]
    EmptyFixture { path: PathBuf },

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' returned non-zero exit status: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("output of `{command}` is not valid UTF-8: {source}")]
    Decode {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for harness operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

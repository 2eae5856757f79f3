// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Executable search path for fixture commands.
//!
//! The harness never modifies its own `PATH`. It builds a [`SearchPath`] with
//! the build-output directory first and hands it to every spawned command.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ordered list of directories searched for executables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Build a search path from a `PATH`-style value.
    pub fn from_env_value(value: Option<&OsStr>) -> Self {
        let dirs = value.map(|v| std::env::split_paths(v).collect()).unwrap_or_default();
        Self { dirs }
    }

    /// Search path inherited from this process.
    pub fn inherited() -> Self {
        Self::from_env_value(std::env::var_os("PATH").as_deref())
    }

    /// Return a copy with `dir` searched before everything else.
    pub fn prepend(&self, dir: impl Into<PathBuf>) -> Self {
        let mut dirs = Vec::with_capacity(self.dirs.len() + 1);
        dirs.push(dir.into());
        dirs.extend(self.dirs.iter().cloned());
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Join into a value suitable for the `PATH` environment variable.
    ///
    /// Directories containing the platform separator cannot be represented
    /// and are dropped.
    pub fn to_env_value(&self) -> OsString {
        match std::env::join_paths(&self.dirs) {
            Ok(joined) => joined,
            Err(_) => {
                let usable = self.dirs.iter().filter(|d| std::env::join_paths([d]).is_ok());
                std::env::join_paths(usable).unwrap_or_default()
            }
        }
    }

    /// Resolve `tool` to an absolute executable path, the way a shell would.
    pub fn resolve(&self, tool: &str, cwd: &Path) -> Result<PathBuf> {
        which::which_in(tool, Some(self.to_env_value()), cwd).map_err(|source| {
            Error::ToolNotFound {
                tool: tool.to_string(),
                source,
            }
        })
    }
}

/// Make `dir` absolute against `base` without touching the filesystem.
pub fn absolutize(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

#[cfg(test)]
#[path = "search_path_tests.rs"]
mod tests;

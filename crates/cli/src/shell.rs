// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell invocation of fixture commands.
//!
//! Fixture commands are trusted, opaque strings handed to a shell so they
//! may use pipes, redirection and builtins.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::search_path::SearchPath;

/// Where and how a fixture command runs.
#[derive(Debug, Clone)]
pub struct ExecContext {
    /// Working directory of the command.
    pub working_dir: PathBuf,
    /// `PATH` given to the command.
    pub search_path: SearchPath,
}

/// Runs a command string and returns its standard output.
///
/// Implementations must fail when the command exits unsuccessfully.
pub trait ShellInvoker {
    fn capture(&self, command: &str, ctx: &ExecContext) -> Result<String>;
}

/// Invokes commands through a real shell as `<shell> -c <command>`.
pub struct SystemShell {
    shell: PathBuf,
}

impl SystemShell {
    pub fn new(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &std::path::Path {
        &self.shell
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new(crate::config::defaults::SHELL)
    }
}

impl ShellInvoker for SystemShell {
    fn capture(&self, command: &str, ctx: &ExecContext) -> Result<String> {
        tracing::debug!("running `{}` in {}", command, ctx.working_dir.display());

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .current_dir(&ctx.working_dir)
            .env("PATH", ctx.search_path.to_env_value())
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| Error::Spawn {
                command: command.to_string(),
                source,
            })?;

        tracing::trace!("`{}` exited with {}", command, output.status);
        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status: output.status,
            });
        }

        String::from_utf8(output.stdout).map_err(|source| Error::Decode {
            command: command.to_string(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;

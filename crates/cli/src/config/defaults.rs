// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Relative directories are resolved against the invocation directory.

/// Fixture directory.
pub const TESTS_DIR: &str = "tests";

/// Build-output directory searched before the inherited `PATH`.
pub const BIN_DIR: &str = "zig-out/bin";

/// Executable under test, reported before the run starts.
pub const TOOL: &str = "pc";

/// Shell used to run fixture commands.
pub const SHELL: &str = "sh";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "GOLDEN_LOG";

/// Tracing filter used when [`LOG_ENV`] is unset.
pub const LOG_FILTER: &str = "warn";

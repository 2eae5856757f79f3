// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file and fixture discovery.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the config file looked up by [`find_config`].
pub const CONFIG_FILE: &str = "golden.toml";

/// Find golden.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// List every entry of `dir`, sorted by file name.
///
/// Nothing is filtered out: each entry is treated as a fixture.
pub fn list_fixtures(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_error = |source: std::io::Error| Error::TestDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(dir_error)? {
        entries.push(entry.map_err(dir_error)?);
    }
    entries.sort_by_key(|entry| entry.file_name());

    let fixtures: Vec<PathBuf> = entries.into_iter().map(|entry| entry.path()).collect();
    tracing::debug!("discovered {} fixtures in {}", fixtures.len(), dir.display());
    Ok(fixtures)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

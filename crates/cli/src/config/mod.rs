// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and resolution.
//!
//! Settings come from three layers: command-line flags, an optional
//! `golden.toml`, and built-in defaults, in that order of precedence.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::discovery;
use crate::error::{Error, Result};
use crate::search_path::absolutize;

/// Contents of `golden.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Fixture directory, relative to the config file.
    #[serde(default)]
    pub tests: Option<PathBuf>,

    /// Build-output directory, relative to the config file.
    #[serde(default)]
    pub bin_dir: Option<PathBuf>,

    /// Executable under test.
    #[serde(default)]
    pub tool: Option<String>,

    /// Shell program used to run fixture commands.
    #[serde(default)]
    pub shell: Option<PathBuf>,
}

/// Parse config content. `path` is used for error messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// A loaded config together with the file it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// None when no config file was used.
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Directory config-relative paths are resolved against.
    fn base_dir<'a>(&'a self, cwd: &'a Path) -> &'a Path {
        self.path.as_deref().and_then(Path::parent).unwrap_or(cwd)
    }
}

/// Load the explicit config file, or discover one from `cwd`.
///
/// An explicit file that does not exist is an error; finding nothing during
/// discovery is not.
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => {
            let path = absolutize(cwd, path);
            if !path.is_file() {
                return Err(Error::ConfigNotFound { path });
            }
            Some(path)
        }
        None => discovery::find_config(cwd),
    };

    match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(LoadedConfig {
                config: load(&path)?,
                path: Some(path),
            })
        }
        None => {
            tracing::debug!("no {} found, using defaults", discovery::CONFIG_FILE);
            Ok(LoadedConfig::default())
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub tests: Option<PathBuf>,
    pub bin_dir: Option<PathBuf>,
    pub tool: Option<String>,
    pub shell: Option<PathBuf>,
}

/// Fully resolved harness settings. Directories are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Invocation directory; fixture commands run here.
    pub root: PathBuf,
    /// Config file used, if any.
    pub config_path: Option<PathBuf>,
    pub tests_dir: PathBuf,
    pub bin_dir: PathBuf,
    pub tool: String,
    pub shell: PathBuf,
}

impl Settings {
    /// Merge overrides, config and defaults.
    pub fn resolve(overrides: &Overrides, loaded: &LoadedConfig, cwd: &Path) -> Self {
        let config = &loaded.config;
        let config_dir = loaded.base_dir(cwd);

        Self {
            root: cwd.to_path_buf(),
            config_path: loaded.path.clone(),
            tests_dir: resolve_dir(
                overrides.tests.as_deref(),
                config.tests.as_deref(),
                defaults::TESTS_DIR,
                cwd,
                config_dir,
            ),
            bin_dir: resolve_dir(
                overrides.bin_dir.as_deref(),
                config.bin_dir.as_deref(),
                defaults::BIN_DIR,
                cwd,
                config_dir,
            ),
            tool: overrides
                .tool
                .clone()
                .or_else(|| config.tool.clone())
                .unwrap_or_else(|| defaults::TOOL.to_string()),
            shell: overrides
                .shell
                .clone()
                .or_else(|| config.shell.clone())
                .unwrap_or_else(|| PathBuf::from(defaults::SHELL)),
        }
    }
}

/// Flags resolve against `cwd`, config values against `config_dir`.
fn resolve_dir(
    flag: Option<&Path>,
    from_config: Option<&Path>,
    default: &str,
    cwd: &Path,
    config_dir: &Path,
) -> PathBuf {
    match (flag, from_config) {
        (Some(flag), _) => absolutize(cwd, flag),
        (None, Some(value)) => absolutize(config_dir, value),
        (None, None) => cwd.join(default),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is stored in `prio.toml` and includes:
//! - `[paths]`: default locations of the raw, labeled and scored tables
//! - `label_limit`: optional cap on how many rows the label stage keeps
//! - `[policy]`: overrides for any of the classification and scoring tables
//!
//! Lookup order: `--config`, `PRIO_CONFIG`, the nearest `prio.toml` walking
//! up from the current directory, then `<config dir>/prio/config.toml`.
//! With none of those present the built-in defaults apply.

use prio_core::Policy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "prio.toml";
const USER_CONFIG_DIR: &str = "prio";
const USER_CONFIG_FILE: &str = "config.toml";

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default table locations.
    pub paths: Paths,
    /// Keep only the first N rows in the label stage.
    pub label_limit: Option<usize>,
    /// Classification and scoring tables.
    pub policy: Policy,
}

/// Default input and output tables for each stage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Ingested records (input of `label`).
    pub raw: PathBuf,
    /// Labeled records (output of `label`, input of `score`).
    pub labeled: PathBuf,
    /// Scored records (output of `score`, input of the dashboard).
    pub scored: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            raw: PathBuf::from("data/github_issues_raw.csv"),
            labeled: PathBuf::from("data/github_issues_labeled_50.csv"),
            scored: PathBuf::from("data/github_issues_scored_50.csv"),
        }
    }
}

impl Paths {
    /// Resolves relative paths against `base`.
    fn resolve_against(&mut self, base: &Path) {
        for path in [&mut self.raw, &mut self.labeled, &mut self.scored] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file. Relative table paths are
    /// resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config
            .policy
            .validate()
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        if let Some(base) = path.parent() {
            config.paths.resolve_against(base);
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolves configuration using the documented lookup order.
    ///
    /// An explicitly requested file (flag or `PRIO_CONFIG`) must exist;
    /// discovered files are optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Config::load(path);
        }
        if let Some(path) = env::config_path() {
            return Config::load(&path);
        }
        let cwd = std::env::current_dir()?;
        if let Some(path) = find_config_file(&cwd) {
            return Config::load(&path);
        }
        if let Some(path) = user_config_file().filter(|p| p.is_file()) {
            return Config::load(&path);
        }
        tracing::debug!("no config file found, using defaults");
        Ok(Config::default())
    }
}

/// Find `prio.toml` by walking up from `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Per-user config file location, e.g. `~/.config/prio/config.toml`.
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

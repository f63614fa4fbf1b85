// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for command tests.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::Config;

/// Three issues covering the High, Medium and Low tiers.
pub(crate) const RAW: &str = "\
ticket_id,title,description,created_date,state
GH-1,minor typo in docs,,2024-01-05,closed
GH-2,system crash causes data loss,urgent blocker,2024-02-10,open
GH-3,Login error for SSO users,auth fails soon,2024-03-15,open
";

/// A temp directory with configured table paths inside it.
pub(crate) struct Workspace {
    pub dir: TempDir,
    pub config: Config,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.raw = dir.path().join("data/raw.csv");
        config.paths.labeled = dir.path().join("data/labeled.csv");
        config.paths.scored = dir.path().join("data/scored.csv");
        Workspace { dir, config }
    }

    /// Writes the raw table.
    pub fn with_raw(self, csv: &str) -> Self {
        let raw = &self.config.paths.raw;
        fs::create_dir_all(raw.parent().unwrap()).unwrap();
        fs::write(raw, csv).unwrap();
        self
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes the raw table and runs label then score.
    pub fn scored(csv: &str) -> Self {
        let ws = Workspace::new().with_raw(csv);
        let mut sink = Vec::new();
        super::run::run_impl(&ws.config, &Default::default(), None, &mut sink).unwrap();
        ws
    }
}

/// Runs `f` against an in-memory writer and returns what it wrote.
pub(crate) fn capture<F>(f: F) -> String
where
    F: FnOnce(&mut dyn std::io::Write) -> crate::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

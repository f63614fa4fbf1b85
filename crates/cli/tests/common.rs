// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Three issues covering the High, Medium and Low tiers.
pub const RAW: &str = "\
ticket_id,title,description,created_date,state
GH-1,minor typo in docs,,2024-01-05,closed
GH-2,system crash causes data loss,urgent blocker,2024-02-10,open
GH-3,Login error for SSO users,auth fails soon,2024-03-15,open
";

/// Table paths used by every project created here, relative to `prio.toml`.
const PROJECT_CONFIG: &str = "\
[paths]
raw = \"data/raw.csv\"
labeled = \"data/labeled.csv\"
scored = \"data/scored.csv\"
";

pub fn prio() -> Command {
    let mut cmd = cargo_bin_cmd!("prio");
    cmd.env_remove("PRIO_CONFIG")
        .env_remove("PRIO_LOG")
        .env_remove("PRIO_TIMINGS")
        .env("NO_COLOR", "1");
    cmd
}

/// A temp directory holding a `prio.toml` and, optionally, the raw table.
pub struct Project {
    pub temp: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("prio.toml"), PROJECT_CONFIG).unwrap();
        Project { temp }
    }

    pub fn with_raw(csv: &str) -> Self {
        let project = Project::new();
        fs::create_dir_all(project.path("data")).unwrap();
        fs::write(project.path("data/raw.csv"), csv).unwrap();
        project
    }

    /// A project whose scored table already exists.
    pub fn scored() -> Self {
        let project = Project::with_raw(RAW);
        project.cmd().arg("run").assert().success();
        project
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.temp.path().join(rel)
    }

    /// `prio` running inside the project directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = prio();
        cmd.current_dir(self.temp.path());
        cmd
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }
}

/// Stdout of a successful run, parsed as JSON.
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

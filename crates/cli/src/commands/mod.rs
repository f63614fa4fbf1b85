// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod dashboard;
pub mod label;
pub mod policy;
pub mod run;
pub mod score;
pub mod show;
#[cfg(test)]
pub(crate) mod testing;
pub mod top;

use std::path::{Path, PathBuf};

use prio_core::RiskLevel;

use crate::cli::QueryArgs;
use crate::config::Config;
use crate::dashboard::{Dashboard, Query};
use crate::error::{Error, Result};
use crate::filter::parse_filter;
use crate::io::read_stage_input;

/// Shown when the raw table is missing.
pub(crate) const RAW_HINT: &str =
    "export issues to this path first (columns: ticket_id, title, description, created_date)";
/// Shown when the labeled table is missing.
pub(crate) const LABELED_HINT: &str = "run 'prio label' first";
/// Shown when the scored table is missing.
pub(crate) const SCORED_HINT: &str = "run 'prio score' (or 'prio run') first";

/// Explicit path if given, else the configured default.
pub(crate) fn pick(explicit: Option<&Path>, configured: &Path) -> PathBuf {
    explicit.unwrap_or(configured).to_path_buf()
}

/// Loads the scored table for review commands.
pub(crate) fn open_dashboard(config: &Config, input: Option<&Path>) -> Result<Dashboard> {
    let path = pick(input, &config.paths.scored);
    let table = read_stage_input(&path, SCORED_HINT)?;
    Ok(Dashboard::new(table))
}

/// Converts command-line selection flags into a [`Query`].
pub(crate) fn build_query(args: &QueryArgs) -> Result<Query> {
    let risk_levels = args
        .risk
        .iter()
        .map(|r| {
            r.parse::<RiskLevel>()
                .map_err(|_| Error::InvalidRiskLevel(r.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    let filters = args
        .filter
        .iter()
        .map(|f| parse_filter(f))
        .collect::<Result<Vec<_>>>()?;
    Ok(Query {
        categories: args.category.iter().map(|c| c.trim().to_string()).collect(),
        risk_levels,
        min_score: args.min_score,
        filters,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

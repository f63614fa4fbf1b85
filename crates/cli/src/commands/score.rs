// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use prio_core::{Pipeline, Table};

use crate::cli::StageArgs;
use crate::config::Config;
use crate::display::{format_table_head, SCORE_SUMMARY_COLUMNS};
use crate::error::Result;
use crate::io::{read_stage_input, write_table};

use super::{pick, LABELED_HINT};

/// Rows shown in the summary after scoring.
const SUMMARY_ROWS: usize = 10;

pub fn run(config: &Config, io: &StageArgs) -> Result<()> {
    run_impl(config, io, &mut std::io::stdout())
}

pub(crate) fn run_impl(config: &Config, io: &StageArgs, out: &mut dyn Write) -> Result<()> {
    let input = pick(io.input.as_deref(), &config.paths.labeled);
    let output = pick(io.output.as_deref(), &config.paths.scored);

    let mut table = read_stage_input(&input, LABELED_HINT)?;
    let count = score_table(config, &mut table)?;
    write_table(&output, &table)?;

    tracing::info!(count, path = %output.display(), "scored issues");
    print_summary(&table, &output, out)
}

/// Scores rows in place and orders them by priority.
pub(crate) fn score_table(config: &Config, table: &mut Table) -> Result<usize> {
    let pipeline = Pipeline::new(&config.policy);
    Ok(crate::time_phase!("pipeline::score", { pipeline.score(table)? }))
}

/// Prints where the table went and its highest-priority rows.
pub(crate) fn print_summary(table: &Table, path: &Path, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Saved: {} ({} issues)", path.display(), table.len())?;
    writeln!(out)?;
    writeln!(out, "Top {SUMMARY_ROWS}:")?;
    writeln!(out, "{}", format_table_head(table, SCORE_SUMMARY_COLUMNS, SUMMARY_ROWS))?;
    Ok(())
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;

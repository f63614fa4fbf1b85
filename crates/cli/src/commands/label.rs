// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use prio_core::{Pipeline, Table};

use crate::cli::StageArgs;
use crate::config::Config;
use crate::error::Result;
use crate::io::{read_stage_input, write_table};

use super::{pick, RAW_HINT};

pub fn run(config: &Config, io: &StageArgs, limit: Option<usize>) -> Result<()> {
    run_impl(config, io, limit, &mut std::io::stdout())
}

pub(crate) fn run_impl(
    config: &Config,
    io: &StageArgs,
    limit: Option<usize>,
    out: &mut dyn Write,
) -> Result<()> {
    let input = pick(io.input.as_deref(), &config.paths.raw);
    let output = pick(io.output.as_deref(), &config.paths.labeled);

    let mut table = read_stage_input(&input, RAW_HINT)?;
    let count = label_table(config, &mut table, limit.or(config.label_limit))?;
    write_table(&output, &table)?;

    tracing::info!(count, path = %output.display(), "labeled issues");
    writeln!(out, "Saved: {} ({} issues)", output.display(), count)?;
    Ok(())
}

/// Keeps the first `limit` rows, then labels them in place.
pub(crate) fn label_table(config: &Config, table: &mut Table, limit: Option<usize>) -> Result<usize> {
    if let Some(n) = limit {
        table.truncate(n);
    }
    let pipeline = Pipeline::new(&config.policy);
    Ok(crate::time_phase!("pipeline::label", { pipeline.label(table)? }))
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use prio_core::Pipeline;

use crate::cli::StageArgs;
use crate::config::Config;
use crate::error::Result;
use crate::io::{read_stage_input, write_table};

use super::score::print_summary;
use super::{pick, RAW_HINT};

pub fn run(config: &Config, io: &StageArgs, limit: Option<usize>) -> Result<()> {
    run_impl(config, io, limit, &mut std::io::stdout())
}

/// Raw table straight to scored table; no labeled file is written.
pub(crate) fn run_impl(
    config: &Config,
    io: &StageArgs,
    limit: Option<usize>,
    out: &mut dyn Write,
) -> Result<()> {
    let input = pick(io.input.as_deref(), &config.paths.raw);
    let output = pick(io.output.as_deref(), &config.paths.scored);

    let mut table = read_stage_input(&input, RAW_HINT)?;
    if let Some(n) = limit.or(config.label_limit) {
        table.truncate(n);
    }
    let pipeline = Pipeline::new(&config.policy);
    let count = crate::time_phase!("pipeline::run", { pipeline.run(&mut table)? });
    write_table(&output, &table)?;

    tracing::info!(count, path = %output.display(), "labeled and scored issues");
    print_summary(&table, &output, out)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::{InputArgs, OutputFormat, QueryArgs};
use crate::config::Config;
use crate::display::format_prioritized;
use crate::error::Result;

use super::{build_query, open_dashboard};

pub fn run(
    config: &Config,
    input: &InputArgs,
    query: &QueryArgs,
    limit: usize,
    output: OutputFormat,
) -> Result<()> {
    run_impl(config, input, query, limit, output, &mut std::io::stdout())
}

pub(crate) fn run_impl(
    config: &Config,
    input: &InputArgs,
    query: &QueryArgs,
    limit: usize,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let query = build_query(query)?;
    let dashboard = open_dashboard(config, input.input.as_deref())?;
    let mut issues = dashboard.select(&query).prioritized();
    issues.truncate(limit);

    match output {
        OutputFormat::Text if issues.is_empty() => {
            writeln!(out, "No issues match the current filters.")?
        }
        OutputFormat::Text => writeln!(out, "{}", format_prioritized(&issues))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&issues)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "top_tests.rs"]
mod tests;

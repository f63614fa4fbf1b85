// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::{InputArgs, OutputFormat, QueryArgs};
use crate::config::Config;
use crate::dashboard::TOP_HIGH_RISK;
use crate::display::format_report;
use crate::error::Result;

use super::{build_query, open_dashboard};

pub fn run(
    config: &Config,
    input: &InputArgs,
    query: &QueryArgs,
    output: OutputFormat,
) -> Result<()> {
    run_impl(config, input, query, output, &mut std::io::stdout())
}

pub(crate) fn run_impl(
    config: &Config,
    input: &InputArgs,
    query: &QueryArgs,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let query = build_query(query)?;
    let dashboard = open_dashboard(config, input.input.as_deref())?;
    let view = dashboard.select(&query);
    tracing::debug!(selected = view.len(), "dashboard selection");
    let report = view.report(TOP_HIGH_RISK);

    match output {
        OutputFormat::Text => writeln!(out, "{}", format_report(&report))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;

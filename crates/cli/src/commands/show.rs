// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::{InputArgs, OutputFormat};
use crate::config::Config;
use crate::display::format_detail;
use crate::error::{Error, Result};

use super::open_dashboard;

pub fn run(config: &Config, ticket_id: &str, input: &InputArgs, output: OutputFormat) -> Result<()> {
    run_impl(config, ticket_id, input, output, &mut std::io::stdout())
}

pub(crate) fn run_impl(
    config: &Config,
    ticket_id: &str,
    input: &InputArgs,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let dashboard = open_dashboard(config, input.input.as_deref())?;
    let ticket_id = ticket_id.trim();
    let detail = dashboard
        .find(ticket_id)
        .ok_or_else(|| Error::TicketNotFound(ticket_id.to_string()))?;

    match output {
        OutputFormat::Text => writeln!(out, "{}", format_detail(&detail))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;

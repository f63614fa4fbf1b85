// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use prio_core::Policy;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};

/// Wraps the policy so the TOML output can be pasted into `prio.toml`.
#[derive(Serialize)]
struct PolicySection<'a> {
    policy: &'a Policy,
}

pub fn run(config: &Config, output: OutputFormat) -> Result<()> {
    run_impl(config, output, &mut std::io::stdout())
}

pub(crate) fn run_impl(config: &Config, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match output {
        OutputFormat::Text => {
            let section = PolicySection {
                policy: &config.policy,
            };
            let text = toml::to_string_pretty(&section)
                .map_err(|e| Error::Config(format!("failed to serialize policy: {e}")))?;
            write!(out, "{text}")?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&config.policy)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;

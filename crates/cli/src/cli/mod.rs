// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{InputArgs, QueryArgs, StageArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "prio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Rule-based issue prioritization and risk scoring")]
#[command(
    long_about = "Rule-based issue prioritization and risk scoring.\n\n\
    Labels issues by keyword rules, scores them on an additive 0-100 scale, \
    buckets them into risk levels and reports on the result."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Read configuration from <path> instead of searching for prio.toml
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Pipeline
    // ─────────────────────────────────────────────────────────────────────────
    /// Classify raw issues by keyword rules
    #[command(after_help = colors::examples("\
Examples:
  prio label                    Label the configured raw table
  prio label -n 50              Label only the first 50 issues
  prio label -i raw.csv -o labeled.csv"))]
    Label {
        #[command(flatten)]
        io: StageArgs,

        /// Keep only the first N issues
        #[arg(long = "limit", short = 'n', value_name = "N")]
        limit: Option<usize>,
    },

    /// Score labeled issues and assign risk levels
    #[command(after_help = colors::examples("\
Examples:
  prio score                    Score the configured labeled table
  prio score -i labeled.csv -o scored.csv"))]
    Score {
        #[command(flatten)]
        io: StageArgs,
    },

    /// Label and score raw issues in one step
    #[command(after_help = colors::examples("\
Examples:
  prio run                      Raw table to scored table
  prio run -n 50 -o scored.csv  Sample the first 50 issues"))]
    Run {
        #[command(flatten)]
        io: StageArgs,

        /// Keep only the first N issues
        #[arg(long = "limit", short = 'n', value_name = "N")]
        limit: Option<usize>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Review
    // ─────────────────────────────────────────────────────────────────────────
    /// Show KPIs, counts and the prioritized list
    #[command(after_help = colors::examples("\
Examples:
  prio dashboard                         Everything in the scored table
  prio dashboard -r high                 High-risk issues only
  prio dashboard -c Outage/Incident      One category
  prio dashboard --min-score 55          Medium risk and above
  prio dashboard -q \"created > 2024-06-01\"
  prio dashboard -o json                 Machine-readable report

Filter Expressions:
  Syntax: FIELD OPERATOR VALUE
  Fields: score, priority, severity, created
  Operators: <, <=, >, >=, =, != (or lt, lte, gt, gte, eq, ne)
  Values: integers, or YYYY-MM-DD dates for created"))]
    Dashboard {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        query: QueryArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List the highest-scored issues
    #[command(after_help = colors::examples("\
Examples:
  prio top                      Ten highest-scored issues
  prio top -n 3 -r high         Three highest High-risk issues
  prio top -q \"severity = 5\"    Most severe issues first"))]
    Top {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        query: QueryArgs,

        /// Number of issues to list
        #[arg(long = "limit", short = 'n', value_name = "N", default_value_t = 10)]
        limit: usize,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Explain one issue's score
    #[command(arg_required_else_help = true)]
    #[command(after_help = colors::examples("\
Examples:
  prio show <ticket_id>         Detail view with score breakdown
  prio show GH-1234 -o json     Detail as JSON"))]
    Show {
        /// Ticket id to show
        #[arg(value_parser = non_empty_string)]
        ticket_id: String,

        #[command(flatten)]
        input: InputArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Print the effective scoring policy (text is TOML)
    Policy {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  prio completion bash > ~/.local/share/bash-completion/completions/prio
  prio completion zsh > ~/.zfunc/_prio
  prio completion fish > ~/.config/fish/completions/prio.fish"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;

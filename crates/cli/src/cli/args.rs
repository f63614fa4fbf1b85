// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` so stage and review
//! commands spell their common flags the same way.

use std::path::PathBuf;

use clap::Args;

/// Input and output tables for a pipeline stage.
#[derive(Args, Clone, Debug, Default)]
pub struct StageArgs {
    /// Table to read (defaults to the configured path)
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Table to write (defaults to the configured path)
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Scored table to review.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Scored table to read (defaults to the configured path)
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Row selection for review commands.
#[derive(Args, Clone, Debug, Default)]
pub struct QueryArgs {
    /// Filter by category (comma-separated or repeated)
    #[arg(long, short, value_delimiter = ',')]
    pub category: Vec<String>,

    /// Filter by risk level: high, medium, low (comma-separated or repeated)
    #[arg(long, short, value_delimiter = ',')]
    pub risk: Vec<String>,

    /// Minimum priority score
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=100))]
    pub min_score: i64,

    /// Filter expression (e.g., "severity >= 4", "created > 2024-01-01")
    #[arg(long, short = 'q', value_name = "EXPR")]
    pub filter: Vec<String>,
}

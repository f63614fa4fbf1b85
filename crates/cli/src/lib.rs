// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! priokit - the library behind the `prio` command.
//!
//! Reads issue tables from CSV, runs them through the [`prio_core`] label
//! and score stages, and reports on the scored result.
//!
//! # Main Components
//!
//! - [`Config`] - table locations and the scoring [`Policy`](prio_core::Policy)
//! - [`io`] - CSV persistence for [`Table`](prio_core::Table)
//! - [`dashboard`] - KPIs, counts and prioritized lists over a scored table
//! - [`filter`] - `field op value` row filters
//! - [`Error`] - Error types for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use priokit::{Config, dashboard::{Dashboard, Query}, io};
//!
//! let config = Config::resolve(None)?;
//! let table = io::read_table(&config.paths.scored)?;
//! let dashboard = Dashboard::new(table);
//! let kpis = dashboard.select(&Query::default()).kpis();
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod dashboard;
mod display;
pub mod env;
pub mod filter;
pub mod help;
pub mod io;
pub mod timings;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, InputArgs, OutputFormat, QueryArgs, StageArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command;
    if let Command::Completion { shell } = command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "prio", &mut std::io::stdout());
        return Ok(());
    }

    let config = crate::time_phase!("config::resolve", {
        Config::resolve(cli.config.as_deref())?
    });

    match command {
        Command::Label { io, limit } => commands::label::run(&config, &io, limit),
        Command::Score { io } => commands::score::run(&config, &io),
        Command::Run { io, limit } => commands::run::run(&config, &io, limit),
        Command::Dashboard {
            input,
            query,
            output,
        } => commands::dashboard::run(&config, &input, &query, output),
        Command::Top {
            input,
            query,
            limit,
            output,
        } => commands::top::run(&config, &input, &query, limit, output),
        Command::Show {
            ticket_id,
            input,
            output,
        } => commands::show::run(&config, &ticket_id, &input, output),
        Command::Policy { output } => commands::policy::run(&config, output),
        Command::Completion { .. } => Ok(()),
    }
}

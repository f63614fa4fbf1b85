// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use priokit::{env, Cli};
use tracing_subscriber::EnvFilter;

/// Log filter when `PRIO_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging() {
    let directive = env::log_filter().unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();
    if let Err(e) = priokit::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

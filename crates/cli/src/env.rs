// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `PRIO_TIMINGS` is set (any value).
pub fn prio_timings() -> bool {
    std::env::var(vars::PRIO_TIMINGS).is_ok()
}

/// Returns the log filter directive from `PRIO_LOG`, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::PRIO_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns the config file path from `PRIO_CONFIG`, if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::PRIO_CONFIG)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

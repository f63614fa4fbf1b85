// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the priokit library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing input: {path}\n  hint: {hint}")]
    MissingInput { path: String, hint: String },

    #[error("ticket not found: {0}")]
    TicketNotFound(String),

    #[error("invalid filter expression: {0}")]
    InvalidFilter(String),

    #[error("invalid risk level: '{0}'\n  hint: valid levels are: high, medium, low")]
    InvalidRiskLevel(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] prio_core::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for priokit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for prio-core operations.
//!
//! Malformed field values are never errors here: the classifier and scorer
//! resolve them through policy defaults. What remains are structural
//! problems with a table or an inconsistent policy.

use thiserror::Error;

/// All possible errors that can occur in prio-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate column: '{0}'")]
    DuplicateColumn(String),

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column '{column}' has {found} values, table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}

/// A specialized Result type for prio-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

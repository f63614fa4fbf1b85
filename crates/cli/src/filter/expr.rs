// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expression types.

use chrono::NaiveDate;

/// A parsed filter expression.
///
/// Filter expressions have the form `field op value`, for example:
/// - `score >= 80` - rows scored 80 or more
/// - `created < 2024-06-01` - rows filed before June 2024
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    /// The column to filter on.
    pub field: FilterField,
    /// The comparison operator.
    pub op: CompareOp,
    /// The value to compare against.
    pub value: FilterValue,
}

/// Fields that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// `priority_score` (`score` or `priority` synonyms).
    Score,
    /// `llm_severity`.
    Severity,
    /// `created_date`.
    Created,
}

impl FilterField {
    /// Returns valid field names for error messages.
    pub fn valid_names() -> &'static str {
        "score, priority, severity, created"
    }

    /// Whether this field compares against dates rather than integers.
    pub fn is_date(self) -> bool {
        matches!(self, FilterField::Created)
    }
}

/// Comparison operators for filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Ge,
    /// Equal (`=`).
    Eq,
    /// Not equal (`!=`).
    Ne,
}

impl CompareOp {
    /// Returns valid operator symbols for error messages.
    pub fn valid_symbols() -> &'static str {
        "<, <=, >, >=, =, != (or: lt, lte, gt, gte, eq, ne)"
    }
}

/// Values that can be compared against in filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterValue {
    /// A whole number like `80`.
    Int(i64),
    /// An absolute date like `2024-01-01`.
    Date(NaiveDate),
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of filter expressions against table rows.

use std::cmp::Ordering;

use chrono::NaiveDate;
use prio_core::record::columns;
use prio_core::Row;

use super::expr::{CompareOp, FilterExpr, FilterField, FilterValue};
use super::parser::try_parse_date;

impl FilterExpr {
    /// Evaluate this filter against a row.
    ///
    /// Rows whose field is absent or unreadable never match, whatever the
    /// operator.
    pub fn matches(&self, row: &Row<'_>) -> bool {
        let ordering = match (self.field, &self.value) {
            (FilterField::Score, FilterValue::Int(v)) => {
                int_cell(row, columns::PRIORITY_SCORE).map(|actual| actual.cmp(v))
            }
            (FilterField::Severity, FilterValue::Int(v)) => {
                int_cell(row, columns::LLM_SEVERITY).map(|actual| actual.cmp(v))
            }
            (FilterField::Created, FilterValue::Date(d)) => {
                row_date(row, columns::CREATED_DATE).map(|actual| actual.cmp(d))
            }
            _ => None,
        };
        ordering.is_some_and(|o| self.op.accepts(o))
    }
}

impl CompareOp {
    /// Whether `actual.cmp(threshold)` satisfies this operator.
    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
        }
    }
}

/// Integer cell, accepting spreadsheet floats like `4.0`.
pub(crate) fn int_cell(row: &Row<'_>, column: &str) -> Option<i64> {
    let cell = row.get(column)?.trim();
    if let Ok(n) = cell.parse::<i64>() {
        return Some(n);
    }
    match cell.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f.trunc() as i64),
        _ => None,
    }
}

/// Date cell; timestamps such as `2024-01-02T10:00:00Z` compare by date.
fn row_date(row: &Row<'_>, column: &str) -> Option<NaiveDate> {
    let cell = row.get(column)?.trim();
    try_parse_date(cell.get(..10)?)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;

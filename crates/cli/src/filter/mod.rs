// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expressions for narrowing scored tables.
//!
//! Expressions take the form:
//!
//! ```text
//! field op value
//! ```
//!
//! # Fields
//!
//! - `score` / `priority` - the `priority_score` column
//! - `severity` - the `llm_severity` column
//! - `created` - the `created_date` column
//!
//! # Operators
//!
//! - `<`, `<=`, `>`, `>=`, `=`, `!=`
//! - `lt`, `lte`, `gt`, `gte`, `eq`, `ne`
//!
//! # Values
//!
//! - Integer: `80`, `4`
//! - Date: `2024-01-01` (YYYY-MM-DD format, `created` only)
//!
//! # Examples
//!
//! ```text
//! score >= 80              # High risk and above
//! severity = 5             # Most severe issues only
//! created > 2024-01-01     # Filed after New Year
//! priority lt 55           # Low risk
//! ```

mod eval;
mod expr;
mod parser;

pub(crate) use eval::int_cell;
pub use expr::{CompareOp, FilterExpr, FilterField, FilterValue};
pub use parser::parse_filter;

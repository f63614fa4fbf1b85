// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for filter expressions.
//!
//! Parses expressions like `score >= 80` or `created > 2024-01-01` into
//! structured [`FilterExpr`] values.

use chrono::NaiveDate;

use crate::error::{Error, Result};

use super::expr::{CompareOp, FilterExpr, FilterField, FilterValue};

/// Parse a filter expression from a string.
///
/// # Examples
///
/// ```ignore
/// let expr = parse_filter("score >= 80")?;
/// let expr = parse_filter("severity eq 5")?;
/// let expr = parse_filter("created > 2024-01-01")?;
/// ```
///
/// # Errors
///
/// Returns an error with a helpful message if the expression is invalid.
pub fn parse_filter(input: &str) -> Result<FilterExpr> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::InvalidFilter("empty filter expression".to_string()));
    }

    let (field_str, rest) = split_field(input)?;
    let field = parse_field(field_str)?;

    let rest = rest.trim_start();
    let (op, rest) = parse_operator(rest)?;

    let value_str = rest.trim();
    if value_str.is_empty() {
        return Err(Error::InvalidFilter(format!(
            "missing value in filter expression: \"{input}\""
        )));
    }
    let value = parse_value(field, value_str)?;

    Ok(FilterExpr { field, op, value })
}

/// Split input into field name and rest.
fn split_field(input: &str) -> Result<(&str, &str)> {
    let end = input
        .find(|c: char| c.is_whitespace() || c == '<' || c == '>' || c == '=' || c == '!')
        .unwrap_or(input.len());

    if end == 0 {
        return Err(Error::InvalidFilter(format!(
            "missing field name in filter expression: \"{input}\""
        )));
    }

    Ok((&input[..end], &input[end..]))
}

fn parse_field(s: &str) -> Result<FilterField> {
    match s.to_lowercase().as_str() {
        "score" | "priority" => Ok(FilterField::Score),
        "severity" => Ok(FilterField::Severity),
        "created" => Ok(FilterField::Created),
        _ => Err(Error::InvalidFilter(format!(
            "unknown field '{s}'. Valid fields: {}",
            FilterField::valid_names()
        ))),
    }
}

/// Parse an operator from the start of the string.
fn parse_operator(s: &str) -> Result<(CompareOp, &str)> {
    if s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return parse_word_operator(s);
    }

    for (symbol, op) in [("<=", CompareOp::Le), (">=", CompareOp::Ge), ("!=", CompareOp::Ne)] {
        if let Some(rest) = s.strip_prefix(symbol) {
            return Ok((op, rest));
        }
    }
    if let Some(doubled) = ["<<", ">>", "=="].into_iter().find(|d| s.starts_with(*d)) {
        return Err(unknown_operator(doubled));
    }
    for (symbol, op) in [('<', CompareOp::Lt), ('>', CompareOp::Gt), ('=', CompareOp::Eq)] {
        if let Some(rest) = s.strip_prefix(symbol) {
            return Ok((op, rest));
        }
    }

    // At most three characters of whatever stands in the operator position.
    let op_end = s
        .char_indices()
        .take_while(|(_, c)| !c.is_whitespace() && !c.is_alphanumeric())
        .take(3)
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    let bad_op = if op_end > 0 { &s[..op_end] } else { "(none)" };
    Err(unknown_operator(bad_op))
}

/// Parse `lt`, `lte`, `gt`, `gte`, `eq` or `ne`, which must be followed by
/// whitespace.
fn parse_word_operator(s: &str) -> Result<(CompareOp, &str)> {
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    let op = match s[..end].to_lowercase().as_str() {
        "lt" => CompareOp::Lt,
        "lte" => CompareOp::Le,
        "gt" => CompareOp::Gt,
        "gte" => CompareOp::Ge,
        "eq" => CompareOp::Eq,
        "ne" => CompareOp::Ne,
        _ => return Err(unknown_operator(&s[..end])),
    };
    Ok((op, &s[end..]))
}

fn unknown_operator(op: &str) -> Error {
    Error::InvalidFilter(format!(
        "unknown operator '{op}'. Valid operators: {}",
        CompareOp::valid_symbols()
    ))
}

/// Parse a value of the kind `field` compares against.
fn parse_value(field: FilterField, s: &str) -> Result<FilterValue> {
    if field.is_date() {
        return try_parse_date(s).map(FilterValue::Date).ok_or_else(|| {
            Error::InvalidFilter(format!("invalid date '{s}'. Expected YYYY-MM-DD"))
        });
    }
    s.parse::<i64>()
        .map(FilterValue::Int)
        .map_err(|_| Error::InvalidFilter(format!("invalid number '{s}'. Expected an integer")))
}

/// Try to parse a date in YYYY-MM-DD format.
pub(super) fn try_parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    let bytes = s.as_bytes();
    if bytes.get(4) != Some(&b'-') || bytes.get(7) != Some(&b'-') {
        return None;
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

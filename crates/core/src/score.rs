// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Priority scorer.
//!
//! A score is a fixed linear combination of five independently computed
//! terms, summed and clamped to `0..=100`:
//!
//! ```text
//! severity × 12 + time + category + keywords + state
//! ```
//!
//! Inputs arrive as raw optional strings, exactly as they sit in a table
//! cell, and every lookup falls back to a policy default instead of failing.

use serde::Serialize;
use std::fmt;

use crate::label::{title_case, Label};
use crate::policy::{matches_any, Policy, OTHER_CATEGORY};
use crate::record::issue_text;
use crate::risk::RiskLevel;

/// Lowest possible score.
pub const MIN_SCORE: u8 = 0;
/// Highest possible score.
pub const MAX_SCORE: u8 = 100;

/// Raw scoring inputs for one record.
///
/// `None` means the field is absent altogether; `Some("")` is an empty
/// cell. The two can resolve to different defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreInput<'a> {
    pub severity: Option<&'a str>,
    pub time_sensitivity: Option<&'a str>,
    pub category: Option<&'a str>,
    pub title: &'a str,
    pub description: &'a str,
    pub state: Option<&'a str>,
}

/// Per-term points after all defaults were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub severity: i64,
    pub time: i64,
    pub category: i64,
    pub keywords: i64,
    pub state: i64,
}

impl Breakdown {
    /// Unclamped sum of all terms.
    pub fn raw_total(&self) -> i64 {
        [self.time, self.category, self.keywords, self.state]
            .into_iter()
            .fold(self.severity, i64::saturating_add)
    }
}

/// Final score of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub priority_score: u8,
    pub breakdown: Breakdown,
    pub risk_level: RiskLevel,
}

impl fmt::Display for Score {
    /// Renders the breakdown, e.g.
    /// `severity(36) + time(0) + category(0) + keywords(0) + state(-10) = 26`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.breakdown;
        write!(
            f,
            "severity({}) + time({}) + category({}) + keywords({}) + state({}) = {}",
            b.severity, b.time, b.category, b.keywords, b.state, self.priority_score
        )
    }
}

impl<'a> ScoreInput<'a> {
    /// Build scoring input from a label that was just computed, as opposed
    /// to one read back from a table.
    pub fn from_label(
        label: &'a Label,
        severity: &'a str,
        title: &'a str,
        description: &'a str,
        state: Option<&'a str>,
    ) -> Self {
        ScoreInput {
            severity: Some(severity),
            time_sensitivity: Some(label.time_sensitivity.as_str()),
            category: Some(label.category.as_str()),
            title,
            description,
            state,
        }
    }
}

/// Score one record. Never fails.
pub fn score(policy: &Policy, input: &ScoreInput<'_>) -> Score {
    let breakdown = Breakdown {
        severity: parse_severity(input.severity, policy.default_severity)
            .saturating_mul(policy.severity_multiplier),
        time: time_points(policy, input.time_sensitivity),
        category: category_points(policy, input.category),
        keywords: keyword_points(policy, &issue_text(input.title, input.description)),
        state: state_points(policy, input.state),
    };
    let priority_score = clamp_score(breakdown.raw_total());
    Score {
        priority_score,
        breakdown,
        risk_level: policy.risk.level_for(priority_score),
    }
}

/// Parse a severity cell, falling back to `default` when absent or
/// non-numeric. Float cells such as `"4.0"` are truncated.
pub fn parse_severity(raw: Option<&str>, default: u8) -> i64 {
    let Some(raw) = raw.map(str::trim) else {
        return i64::from(default);
    };
    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }
    match raw.parse::<f64>() {
        // Saturating cast; the final score is clamped anyway.
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => i64::from(default),
    }
}

fn time_points(policy: &Policy, raw: Option<&str>) -> i64 {
    let normalized = match raw {
        Some(raw) => title_case(raw.trim()),
        None => policy.missing_time_sensitivity.as_str().to_string(),
    };
    policy.time_points_for(&normalized)
}

fn category_points(policy: &Policy, raw: Option<&str>) -> i64 {
    let category = raw.map_or(OTHER_CATEGORY, str::trim);
    policy.category_points_for(category)
}

/// Sum of the points of every keyword tier with at least one match.
pub fn keyword_points(policy: &Policy, text: &str) -> i64 {
    let text = text.to_lowercase();
    policy
        .keyword_tiers
        .iter()
        .filter(|tier| matches_any(&text, &tier.keywords))
        .map(|tier| tier.points)
        .fold(0, i64::saturating_add)
}

fn state_points(policy: &Policy, state: Option<&str>) -> i64 {
    match state {
        Some(state) if state.to_lowercase() == "closed" => policy.closed_penalty,
        _ => 0,
    }
}

/// Clamp a raw total into `MIN_SCORE..=MAX_SCORE`.
pub fn clamp_score(raw: i64) -> u8 {
    // The clamp guarantees the value fits.
    raw.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u8
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tunable policy tables for classification and scoring.
//!
//! Every table is an ordered list of `(pattern, value)` pairs plus a
//! fallback. The defaults reproduce the built-in heuristics; a config file
//! may replace any single table because every field carries a serde default.
//!
//! ```toml
//! [[policy.categories]]
//! name = "Outage/Incident"
//! keywords = ["crash", "panic"]
//!
//! [policy.risk]
//! high = 85
//! medium = 50
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::label::TimeSensitivity;
use crate::risk::RiskThresholds;

/// Category assigned when no keyword rule matches.
pub const OTHER_CATEGORY: &str = "Other";

/// A category and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Keywords that raise the classifier's severity to `severity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityRule {
    pub severity: u8,
    pub keywords: Vec<String>,
}

/// Keywords that set the classifier's time sensitivity to `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRule {
    pub level: TimeSensitivity,
    pub keywords: Vec<String>,
}

/// Points contributed by a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPoints {
    pub name: String,
    pub points: i64,
}

/// Points contributed by a time sensitivity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoints {
    pub level: TimeSensitivity,
    pub points: i64,
}

/// A keyword tier that adds `points` once if any of its keywords appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTier {
    pub name: String,
    pub points: i64,
    pub keywords: Vec<String>,
}

/// The complete, immutable policy surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Category rules in priority order. The first match wins.
    pub categories: Vec<CategoryRule>,
    /// Severity rules in priority order. The first match wins.
    pub severity_rules: Vec<SeverityRule>,
    /// Severity used by the classifier when no rule matches, and by the
    /// scorer when the severity field is missing or non-numeric.
    pub default_severity: u8,
    /// Time sensitivity rules in priority order. The first match wins.
    pub time_rules: Vec<TimeRule>,
    /// Time sensitivity the classifier assigns when no rule matches.
    pub default_time_sensitivity: TimeSensitivity,
    /// Points per severity unit.
    pub severity_multiplier: i64,
    /// Points per time sensitivity level.
    pub time_points: Vec<TimePoints>,
    /// Level the scorer assumes when the time sensitivity field is absent.
    pub missing_time_sensitivity: TimeSensitivity,
    /// Points for a time sensitivity value that names no level.
    pub unknown_time_points: i64,
    /// Points per category.
    pub category_points: Vec<CategoryPoints>,
    /// Points for a category missing from `category_points`.
    pub unknown_category_points: i64,
    /// Additive keyword tiers scanned over title and description.
    pub keyword_tiers: Vec<KeywordTier>,
    /// Points added when the record's state is `closed`. Usually negative.
    pub closed_penalty: i64,
    /// Score bounds for the risk tiers.
    pub risk: RiskThresholds,
    /// Provenance note attached to every label.
    pub label_reason: String,
    /// Labeler tag attached to every label.
    pub label_source: String,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for Policy {
    fn default() -> Self {
        let category = |name: &str, keywords: &[&str]| CategoryRule {
            name: name.to_string(),
            keywords: words(keywords),
        };
        let points = |name: &str, points: i64| CategoryPoints {
            name: name.to_string(),
            points,
        };

        Policy {
            categories: vec![
                category(
                    "Outage/Incident",
                    &["crash", "panic", "segfault", "outage", "down", "deadlock"],
                ),
                category(
                    "Data Quality Fix",
                    &["incorrect", "wrong", "null", "missing", "corrupt"],
                ),
                category(
                    "Ops Backlog",
                    &["cleanup", "refactor", "technical debt", "todo"],
                ),
                category(
                    "Process/Workflow Change",
                    &["proposal", "design", "improvement"],
                ),
                category(
                    "Access/Permissions",
                    &["permission", "access", "auth", "oauth"],
                ),
            ],
            severity_rules: vec![
                SeverityRule {
                    severity: 5,
                    keywords: words(&["crash", "data loss", "panic"]),
                },
                SeverityRule {
                    severity: 4,
                    keywords: words(&["broken", "fails", "error"]),
                },
            ],
            default_severity: 3,
            time_rules: vec![
                TimeRule {
                    level: TimeSensitivity::High,
                    keywords: words(&["urgent", "asap", "blocker"]),
                },
                TimeRule {
                    level: TimeSensitivity::Medium,
                    keywords: words(&["soon", "important"]),
                },
            ],
            default_time_sensitivity: TimeSensitivity::Low,
            severity_multiplier: 12,
            time_points: vec![
                TimePoints {
                    level: TimeSensitivity::High,
                    points: 12,
                },
                TimePoints {
                    level: TimeSensitivity::Medium,
                    points: 6,
                },
                TimePoints {
                    level: TimeSensitivity::Low,
                    points: 0,
                },
            ],
            missing_time_sensitivity: TimeSensitivity::Medium,
            unknown_time_points: 6,
            category_points: vec![
                points("Outage/Incident", 15),
                points("Data Quality Fix", 10),
                points("Data/Reporting", 8),
                points("Access/Permissions", 6),
                points("Process/Workflow Change", 4),
                points("Ops Backlog", 3),
                points("KPI Definition", 2),
                points(OTHER_CATEGORY, 0),
            ],
            unknown_category_points: 0,
            keyword_tiers: vec![
                KeywordTier {
                    name: "critical".to_string(),
                    points: 18,
                    keywords: words(&[
                        "blocker",
                        "regression",
                        "crash",
                        "data loss",
                        "security",
                        "panic",
                        "outage",
                        "incident",
                        "sev0",
                        "sev1",
                        "p0",
                        "p1",
                        "urgent",
                    ]),
                },
                KeywordTier {
                    name: "high".to_string(),
                    points: 10,
                    keywords: words(&[
                        "broken",
                        "fails",
                        "failure",
                        "error",
                        "timeout",
                        "exception",
                        "cannot",
                        "can't",
                        "stuck",
                        "deadlock",
                        "corrupt",
                        "leak",
                    ]),
                },
            ],
            closed_penalty: -10,
            risk: RiskThresholds::default(),
            label_reason: "Rule-based classification on issue text".to_string(),
            label_source: "heuristic".to_string(),
        }
    }
}

impl Policy {
    /// Check that the tables are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`] for empty keywords (which would match
    /// every text), empty category names, severities outside 1–5, or risk
    /// thresholds that are out of order or above 100.
    pub fn validate(&self) -> Result<()> {
        for rule in &self.categories {
            if rule.name.trim().is_empty() {
                return Err(Error::InvalidPolicy("category name cannot be empty".into()));
            }
            check_keywords(&format!("category '{}'", rule.name), &rule.keywords)?;
        }
        for rule in &self.severity_rules {
            check_severity(rule.severity)?;
            check_keywords(&format!("severity {}", rule.severity), &rule.keywords)?;
        }
        check_severity(self.default_severity)?;
        for rule in &self.time_rules {
            check_keywords(&format!("time sensitivity {}", rule.level), &rule.keywords)?;
        }
        for tier in &self.keyword_tiers {
            check_keywords(&format!("keyword tier '{}'", tier.name), &tier.keywords)?;
        }
        if self.risk.high > 100 || self.risk.medium > self.risk.high {
            return Err(Error::InvalidPolicy(format!(
                "risk thresholds must satisfy medium <= high <= 100 (got medium={}, high={})",
                self.risk.medium, self.risk.high
            )));
        }
        Ok(())
    }

    /// Points for a category name, or `unknown_category_points` on a miss.
    pub fn category_points_for(&self, category: &str) -> i64 {
        self.category_points
            .iter()
            .find(|entry| entry.name == category)
            .map_or(self.unknown_category_points, |entry| entry.points)
    }

    /// Points for a normalized time sensitivity value, or
    /// `unknown_time_points` when it names no level in the table.
    pub fn time_points_for(&self, normalized: &str) -> i64 {
        self.time_points
            .iter()
            .find(|entry| entry.level.as_str() == normalized)
            .map_or(self.unknown_time_points, |entry| entry.points)
    }
}

fn check_severity(severity: u8) -> Result<()> {
    if (1..=5).contains(&severity) {
        Ok(())
    } else {
        Err(Error::InvalidPolicy(format!(
            "severity {severity} is outside 1-5"
        )))
    }
}

fn check_keywords(owner: &str, keywords: &[String]) -> Result<()> {
    if keywords.iter().any(|k| k.is_empty()) {
        return Err(Error::InvalidPolicy(format!(
            "{owner} has an empty keyword"
        )));
    }
    Ok(())
}

/// True if any keyword occurs in `text` as a case-insensitive substring.
///
/// `text` must already be lowercased; keywords are lowercased here so that
/// hand-edited tables may use any case.
pub fn matches_any(text: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| text.contains(keyword.to_lowercase().as_str()))
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;

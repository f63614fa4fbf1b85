// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword classifier: free text to category, severity and time sensitivity.
//!
//! Each dimension is an ordered rule list evaluated first-match-wins over
//! the lowercased text. There is no tokenization, so `"auth"` also matches
//! `"author"`.

use crate::label::{Label, TimeSensitivity};
use crate::policy::{matches_any, Policy, OTHER_CATEGORY};

/// Classify concatenated title and description text. Never fails.
pub fn classify(policy: &Policy, text: &str) -> Label {
    let text = text.to_lowercase();
    Label {
        category: category_for(policy, &text).to_string(),
        severity: severity_for(policy, &text),
        time_sensitivity: time_sensitivity_for(policy, &text),
        reason: policy.label_reason.clone(),
        source: policy.label_source.clone(),
    }
}

/// First category whose keywords occur in `text`, else `Other`.
///
/// `text` must already be lowercased.
pub fn category_for<'p>(policy: &'p Policy, text: &str) -> &'p str {
    policy
        .categories
        .iter()
        .find(|rule| matches_any(text, &rule.keywords))
        .map_or(OTHER_CATEGORY, |rule| rule.name.as_str())
}

/// Severity of the first matching severity rule, else the default.
///
/// `text` must already be lowercased.
pub fn severity_for(policy: &Policy, text: &str) -> u8 {
    policy
        .severity_rules
        .iter()
        .find(|rule| matches_any(text, &rule.keywords))
        .map_or(policy.default_severity, |rule| rule.severity)
}

/// Level of the first matching time rule, else the classifier default.
///
/// `text` must already be lowercased.
pub fn time_sensitivity_for(policy: &Policy, text: &str) -> TimeSensitivity {
    policy
        .time_rules
        .iter()
        .find(|rule| matches_any(text, &rule.keywords))
        .map_or(policy.default_time_sensitivity, |rule| rule.level)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;

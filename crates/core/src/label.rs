// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label types produced by the keyword classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How soon an issue needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSensitivity {
    High,
    Medium,
    Low,
}

impl TimeSensitivity {
    /// Returns the string representation used in tables and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSensitivity::High => "High",
            TimeSensitivity::Medium => "Medium",
            TimeSensitivity::Low => "Low",
        }
    }
}

impl fmt::Display for TimeSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not one of `High`, `Medium`, `Low`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTimeSensitivity(pub String);

impl fmt::Display for UnknownTimeSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time sensitivity: '{}'", self.0)
    }
}

impl std::error::Error for UnknownTimeSensitivity {}

impl FromStr for TimeSensitivity {
    type Err = UnknownTimeSensitivity;

    /// Parses after trimming and title-casing, so `"  high "` is `High`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match title_case(s.trim()).as_str() {
            "High" => Ok(TimeSensitivity::High),
            "Medium" => Ok(TimeSensitivity::Medium),
            "Low" => Ok(TimeSensitivity::Low),
            _ => Err(UnknownTimeSensitivity(s.to_string())),
        }
    }
}

/// Title-case a string: the first letter of every run of letters is
/// uppercased, the rest lowercased. Non-letters start a new word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Derived classification of one issue record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Category name from the policy's category table, or `Other`.
    pub category: String,
    /// Severity from 1 (trivial) to 5 (crash or data loss).
    pub severity: u8,
    /// How soon the issue needs attention.
    pub time_sensitivity: TimeSensitivity,
    /// Provenance note explaining how the label was produced.
    pub reason: String,
    /// Short tag naming the labeler.
    pub source: String,
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

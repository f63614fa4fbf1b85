// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Risk tiers derived from a priority score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse bucket derived solely from a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// All levels, most severe first.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    /// Returns the string representation used in tables and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(RiskLevel::High),
            "medium" => Ok(RiskLevel::Medium),
            "low" => Ok(RiskLevel::Low),
            _ => Err(format!(
                "invalid risk level: '{s}'\n  hint: valid levels are: high, medium, low"
            )),
        }
    }
}

/// Inclusive lower bounds for the `High` and `Medium` tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub high: u8,
    pub medium: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            high: 80,
            medium: 55,
        }
    }
}

impl RiskThresholds {
    /// Bucket a score. Each bound belongs to the higher tier.
    pub fn level_for(&self, score: u8) -> RiskLevel {
        if score >= self.high {
            RiskLevel::High
        } else if score >= self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Bucket a score with the default thresholds (80 and 55).
pub fn risk_level(score: u8) -> RiskLevel {
    RiskThresholds::default().level_for(score)
}

#[cfg(test)]
#[path = "risk_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    max = { 100, RiskLevel::High },
    high_bound = { 80, RiskLevel::High },
    below_high = { 79, RiskLevel::Medium },
    medium_bound = { 55, RiskLevel::Medium },
    below_medium = { 54, RiskLevel::Low },
    zero = { 0, RiskLevel::Low },
)]
fn risk_level_boundaries(score: u8, expected: RiskLevel) {
    assert_eq!(risk_level(score), expected);
}

#[test]
fn custom_thresholds_move_the_bounds() {
    let thresholds = RiskThresholds {
        high: 90,
        medium: 40,
    };
    assert_eq!(thresholds.level_for(89), RiskLevel::Medium);
    assert_eq!(thresholds.level_for(90), RiskLevel::High);
    assert_eq!(thresholds.level_for(40), RiskLevel::Medium);
    assert_eq!(thresholds.level_for(39), RiskLevel::Low);
}

#[parameterized(
    lower = { "high", RiskLevel::High },
    title = { "Medium", RiskLevel::Medium },
    upper = { "LOW", RiskLevel::Low },
    padded = { " high ", RiskLevel::High },
)]
fn risk_level_from_str_valid(input: &str, expected: RiskLevel) {
    assert_eq!(input.parse::<RiskLevel>().unwrap(), expected);
}

#[test]
fn risk_level_from_str_invalid() {
    let err = "critical".parse::<RiskLevel>().unwrap_err();
    assert!(err.contains("critical"));
    assert!(err.contains("hint"));
}

#[test]
fn risk_levels_order_most_severe_first() {
    let mut levels = vec![RiskLevel::Low, RiskLevel::High, RiskLevel::Medium];
    levels.sort();
    assert_eq!(levels, RiskLevel::ALL.to_vec());
}

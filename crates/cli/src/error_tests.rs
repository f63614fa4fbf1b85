// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    ticket_not_found = { Error::TicketNotFound("GH-42".into()), "GH-42" },
    invalid_filter = { Error::InvalidFilter("unknown field 'x'".into()), "unknown field" },
    invalid_risk = { Error::InvalidRiskLevel("urgent".into()), "valid levels" },
    config = { Error::Config("failed to parse config".into()), "config error" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn missing_input_names_upstream_step() {
    let err = Error::MissingInput {
        path: "data/github_issues_labeled_50.csv".into(),
        hint: "run 'prio label' first".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("data/github_issues_labeled_50.csv"));
    assert!(msg.contains("hint: run 'prio label' first"));
}

#[test]
fn error_from_core_is_transparent() {
    let err: Error = prio_core::Error::DuplicateColumn("title".into()).into();
    assert!(matches!(err, Error::Core(_)));
    assert_eq!(err.to_string(), "duplicate column: 'title'");
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}

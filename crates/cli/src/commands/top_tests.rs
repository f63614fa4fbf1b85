// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{capture, Workspace, RAW};

fn top(ws: &Workspace, query: &QueryArgs, limit: usize, output: OutputFormat) -> String {
    capture(|w| run_impl(&ws.config, &InputArgs::default(), query, limit, output, w))
}

#[test]
fn top_limits_rows() {
    let ws = Workspace::scored(RAW);
    let out = top(&ws, &QueryArgs::default(), 2, OutputFormat::Text);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ticket_id"));
    assert!(lines[1].starts_with("GH-2"));
    assert!(lines[2].starts_with("GH-3"));
}

#[test]
fn top_with_filter_expression() {
    let ws = Workspace::scored(RAW);
    let query = QueryArgs {
        filter: vec!["created < 2024-03-01".into()],
        ..QueryArgs::default()
    };
    let out = top(&ws, &query, 10, OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["ticket_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["GH-2", "GH-1"]);
    assert_eq!(json[0]["priority_score"], 100);
}

#[test]
fn top_with_no_matches() {
    let ws = Workspace::scored(RAW);
    let query = QueryArgs {
        category: vec!["KPI Definition".into()],
        ..QueryArgs::default()
    };
    let out = top(&ws, &query, 10, OutputFormat::Text);
    assert_eq!(out, "No issues match the current filters.\n");
}

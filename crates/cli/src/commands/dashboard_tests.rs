// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{capture, Workspace, RAW};

#[test]
fn dashboard_text_report() {
    let ws = Workspace::scored(RAW);
    let out = capture(|w| {
        run_impl(
            &ws.config,
            &InputArgs::default(),
            &QueryArgs::default(),
            OutputFormat::Text,
            w,
        )
    });
    assert!(out.starts_with("Total Issues: 3\nHigh Risk: 1\nAvg Priority Score: 65\nMax Priority Score: 100\n"));
    assert!(out.contains("Top 10 High-Risk Issues:"));
    assert!(out.contains("GH-2       system crash causes data loss"));
}

#[test]
fn dashboard_json_report() {
    let ws = Workspace::scored(RAW);
    let query = QueryArgs {
        risk: vec!["medium".into(), "low".into()],
        ..QueryArgs::default()
    };
    let out = capture(|w| run_impl(&ws.config, &InputArgs::default(), &query, OutputFormat::Json, w));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["kpis"]["total"], 2);
    assert_eq!(json["kpis"]["high_risk"], 0);
    assert_eq!(json["kpis"]["average_score"], 48);
    assert_eq!(json["top_high_risk"].as_array().unwrap().len(), 0);
    assert_eq!(json["issues"][0]["ticket_id"], "GH-3");
    assert_eq!(json["by_risk"][0]["label"], "High");
    assert_eq!(json["by_risk"][0]["count"], 0);
}

#[test]
fn dashboard_invalid_filter_fails_before_reading() {
    let ws = Workspace::new();
    let query = QueryArgs {
        filter: vec!["owner = me".into()],
        ..QueryArgs::default()
    };
    let mut sink = Vec::new();
    let err = run_impl(&ws.config, &InputArgs::default(), &query, OutputFormat::Text, &mut sink)
        .unwrap_err();
    assert!(matches!(err, crate::Error::InvalidFilter(_)));
}

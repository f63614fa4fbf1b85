// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::risk::RiskLevel;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn raw_table() -> Table {
    let mut table = Table::new(strings(&[
        "ticket_id",
        "created_date",
        "system",
        "title",
        "description",
        "state",
    ]))
    .unwrap();
    for row in [
        ["GH-1", "2025-01-02", "apache/airflow", "Fix typo in docs", "", "closed"],
        [
            "GH-2",
            "2025-01-03",
            "apache/airflow",
            "Scheduler crash, urgent",
            "worker stuck after upgrade",
            "open",
        ],
        [
            "GH-3",
            "2025-01-04",
            "apache/airflow",
            "Wrong row counts",
            "export returns an error",
            "open",
        ],
    ] {
        table.push_row(strings(&row)).unwrap();
    }
    table
}

fn ids(table: &Table) -> Vec<&str> {
    table.rows().map(|r| r.get_or_empty("ticket_id")).collect()
}

#[test]
fn label_appends_label_columns() {
    let policy = Policy::default();
    let mut table = raw_table();
    let n = Pipeline::new(&policy).label(&mut table).unwrap();
    assert_eq!(n, 3);
    assert_eq!(
        &table.headers()[6..],
        [
            "llm_category",
            "llm_severity",
            "llm_time_sensitivity",
            "llm_reason",
            "label_source"
        ]
    );
    let row = table.row(1).unwrap();
    assert_eq!(row.get("llm_category"), Some("Outage/Incident"));
    assert_eq!(row.get("llm_severity"), Some("5"));
    assert_eq!(row.get("llm_time_sensitivity"), Some("High"));
    assert_eq!(row.get("label_source"), Some("heuristic"));
}

#[test]
fn label_leaves_source_columns_untouched() {
    let policy = Policy::default();
    let before = raw_table();
    let mut table = before.clone();
    Pipeline::new(&policy).label(&mut table).unwrap();
    for (a, b) in before.rows().zip(table.rows()) {
        assert_eq!(a.cells(), &b.cells()[..a.cells().len()]);
    }
}

#[test]
fn run_scores_and_orders_rows() {
    let policy = Policy::default();
    let mut table = raw_table();
    Pipeline::new(&policy).run(&mut table).unwrap();

    assert_eq!(ids(&table), ["GH-2", "GH-3", "GH-1"]);

    let top = table.row(0).unwrap();
    // 60 + 12 + 15 + 28 + 0
    assert_eq!(top.get("priority_score"), Some("100"));
    assert_eq!(top.get("risk_level"), Some("High"));
    assert_eq!(
        top.get("score_breakdown"),
        Some("severity(60) + time(12) + category(15) + keywords(28) + state(0) = 100")
    );

    let middle = table.row(1).unwrap();
    // 48 + 0 + 10 + 10 + 0
    assert_eq!(middle.get("priority_score"), Some("68"));
    assert_eq!(middle.get("risk_level"), Some("Medium"));

    let last = table.row(2).unwrap();
    // 36 + 0 + 0 + 0 - 10
    assert_eq!(last.get("priority_score"), Some("26"));
    assert_eq!(last.get("risk_level"), Some("Low"));
}

#[test]
fn run_is_idempotent() {
    let policy = Policy::default();
    let pipeline = Pipeline::new(&policy);
    let mut once = raw_table();
    pipeline.run(&mut once).unwrap();
    let mut twice = once.clone();
    pipeline.run(&mut twice).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn per_row_results_ignore_batch_order() {
    let policy = Policy::default();
    let pipeline = Pipeline::new(&policy);
    let table = raw_table();

    let mut reversed = Table::new(table.headers().to_vec()).unwrap();
    for i in (0..table.len()).rev() {
        reversed
            .push_row(table.row(i).unwrap().cells().to_vec())
            .unwrap();
    }

    let mut a = table.clone();
    let mut b = reversed;
    pipeline.run(&mut a).unwrap();
    pipeline.run(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn score_tolerates_missing_label_columns() {
    let policy = Policy::default();
    let mut table = Table::new(strings(&["ticket_id", "title"])).unwrap();
    table.push_row(strings(&["GH-9", ""])).unwrap();
    Pipeline::new(&policy).score(&mut table).unwrap();
    let row = table.row(0).unwrap();
    // severity 3 (36) + Medium (6) + Other (0)
    assert_eq!(row.get("priority_score"), Some("42"));
    assert_eq!(row.get("risk_level"), Some("Low"));
}

#[test]
fn score_tolerates_malformed_label_cells() {
    let policy = Policy::default();
    let mut table = Table::new(strings(&[
        "ticket_id",
        "llm_category",
        "llm_severity",
        "llm_time_sensitivity",
    ]))
    .unwrap();
    table
        .push_row(strings(&["GH-9", "Mystery", "very bad", "whenever"]))
        .unwrap();
    Pipeline::new(&policy).score(&mut table).unwrap();
    let row = table.row(0).unwrap();
    assert_eq!(
        row.get("score_breakdown"),
        Some("severity(36) + time(6) + category(0) + keywords(0) + state(0) = 42")
    );
}

#[test]
fn score_row_matches_record_scoring() {
    let policy = Policy::default();
    let pipeline = Pipeline::new(&policy);
    let mut table = raw_table();
    pipeline.label(&mut table).unwrap();
    for row in table.rows() {
        let title = row.get_or_empty(columns::TITLE);
        let description = row.get_or_empty(columns::DESCRIPTION);
        let label = classify(&policy, &issue_text(title, description));
        let severity = label.severity.to_string();
        let direct = score(
            &policy,
            &ScoreInput::from_label(&label, &severity, title, description, row.get(columns::STATE)),
        );
        assert_eq!(pipeline.score_row(&row), direct);
    }
}

#[test]
fn empty_table_is_fine() {
    let policy = Policy::default();
    let mut table = Table::new(strings(&["ticket_id", "title", "description"])).unwrap();
    assert_eq!(Pipeline::new(&policy).run(&mut table).unwrap(), 0);
    assert!(table.has_column("risk_level"));
}

#[test]
fn priority_of_defaults_to_zero() {
    let mut table = Table::new(strings(&["priority_score"])).unwrap();
    table.push_row(strings(&["n/a"])).unwrap();
    table.push_row(strings(&[" 77 "])).unwrap();
    assert_eq!(priority_of(&table.row(0).unwrap()), 0);
    assert_eq!(priority_of(&table.row(1).unwrap()), 77);
    assert_eq!(RiskLevel::High.as_str(), "High");
}

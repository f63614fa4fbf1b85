// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn dashboard_text_sections() {
    let project = Project::scored();

    project
        .cmd()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Issues: 3"))
        .stdout(predicate::str::contains("High Risk: 1"))
        .stdout(predicate::str::contains("Max Priority Score: 100"))
        .stdout(predicate::str::contains("Top 10 High-Risk Issues:"))
        .stdout(predicate::str::contains("Issues by Category:"))
        .stdout(predicate::str::contains("Issues by Risk Level:"))
        .stdout(predicate::str::contains("Prioritized Issue List:"));
}

#[test]
fn dashboard_json_respects_risk_filter() {
    let project = Project::scored();

    let json = json_stdout(project.cmd().args(["dashboard", "-r", "medium,low", "-o", "json"]));
    assert_eq!(json["kpis"]["total"], 2);
    assert_eq!(json["kpis"]["high_risk"], 0);
    assert_eq!(json["top_high_risk"].as_array().unwrap().len(), 0);
    assert_eq!(json["issues"][0]["ticket_id"], "GH-3");
}

#[test]
fn dashboard_rejects_unknown_risk_level() {
    let project = Project::scored();

    project
        .cmd()
        .args(["dashboard", "-r", "severe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid risk level: 'severe'"));
}

#[test]
fn dashboard_without_scored_table_suggests_score() {
    let project = Project::with_raw(RAW);

    project
        .cmd()
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("run 'prio score'"));
}

#[test]
fn top_with_min_score_and_filter() {
    let project = Project::scored();

    let json = json_stdout(project.cmd().args([
        "top",
        "--min-score",
        "50",
        "-q",
        "created >= 2024-03-01",
        "-o",
        "json",
    ]));
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["ticket_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["GH-3"]);
}

#[test]
fn top_text_when_nothing_matches() {
    let project = Project::scored();

    project
        .cmd()
        .args(["top", "-q", "score > 100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues match the current filters."));
}

#[test]
fn top_rejects_bad_filter() {
    let project = Project::scored();

    project
        .cmd()
        .args(["top", "-q", "severity >> 3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid filter expression"));
}

#[test]
fn show_explains_score() {
    let project = Project::scored();

    project
        .cmd()
        .args(["show", "GH-2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[GH-2] system crash causes data loss"))
        .stdout(predicate::str::contains("Why this score?"))
        .stdout(predicate::str::contains("= 100"));
}

#[test]
fn show_unknown_ticket_fails() {
    let project = Project::scored();

    project
        .cmd()
        .args(["show", "GH-404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ticket not found: GH-404"));
}

#[test]
fn policy_prints_effective_tables() {
    let project = Project::new();

    project
        .cmd()
        .arg("policy")
        .assert()
        .success()
        .stdout(predicate::str::contains("[policy]"))
        .stdout(predicate::str::contains("severity_multiplier = 12"));

    let json = json_stdout(project.cmd().args(["policy", "-o", "json"]));
    assert_eq!(json["severity_multiplier"], 12);
}

#[test]
fn completion_needs_no_project() {
    let temp = TempDir::new().unwrap();

    prio()
        .args(["completion", "bash"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("prio"));
}

#[test]
fn help_lists_command_groups() {
    prio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pipeline"))
        .stdout(predicate::str::contains("Review"))
        .stdout(predicate::str::contains("dashboard"));
}

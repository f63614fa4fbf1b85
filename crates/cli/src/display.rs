// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use prio_core::record::columns;
use prio_core::Table;

use crate::dashboard::{IssueDetail, IssueSummary, Report};

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Longest bar in the count charts.
const BAR_WIDTH: usize = 40;

/// Columns printed after the score stage.
pub const SCORE_SUMMARY_COLUMNS: &[&str] = &[
    columns::TICKET_ID,
    columns::LLM_CATEGORY,
    columns::LLM_SEVERITY,
    columns::LLM_TIME_SENSITIVITY,
    columns::PRIORITY_SCORE,
    columns::RISK_LEVEL,
];

/// Columns of the high-risk block.
const HIGH_RISK_COLUMNS: &[&str] = &[
    columns::TICKET_ID,
    columns::TITLE,
    columns::LLM_CATEGORY,
    columns::PRIORITY_SCORE,
    columns::LLM_REASON,
];

/// Columns of the prioritized list.
const PRIORITIZED_COLUMNS: &[&str] = &[
    columns::TICKET_ID,
    columns::TITLE,
    columns::LLM_CATEGORY,
    columns::LLM_SEVERITY,
    columns::LLM_TIME_SENSITIVITY,
    columns::PRIORITY_SCORE,
    columns::RISK_LEVEL,
    columns::LLM_REASON,
];

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Render rows as left-aligned columns separated by two spaces.
///
/// Cell text is flattened to one line.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let flatten = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.iter().map(|c| flatten(c)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = vec![render_line(headers.iter().copied(), &widths)];
    for row in &rows {
        out.push(render_line(row.iter().map(String::as_str), &widths));
    }
    out.join("\n")
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

/// Render the first `limit` rows of a table, keeping only the listed
/// columns the table actually has.
pub fn format_table_head(table: &Table, wanted: &[&str], limit: usize) -> String {
    let present: Vec<&str> = wanted
        .iter()
        .copied()
        .filter(|c| table.has_column(c))
        .collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .take(limit)
        .map(|row| present.iter().map(|c| row.get_or_empty(c).to_string()).collect())
        .collect();
    format_table(&present, &rows)
}

/// Render issue summaries with the given columns.
pub fn format_issues(issues: &[IssueSummary<'_>], wanted: &[&str]) -> String {
    let rows: Vec<Vec<String>> = issues
        .iter()
        .map(|issue| wanted.iter().map(|c| summary_cell(issue, c)).collect())
        .collect();
    format_table(wanted, &rows)
}

/// Render the prioritized list.
pub fn format_prioritized(issues: &[IssueSummary<'_>]) -> String {
    format_issues(issues, PRIORITIZED_COLUMNS)
}

fn summary_cell(issue: &IssueSummary<'_>, column: &str) -> String {
    match column {
        columns::TICKET_ID => issue.ticket_id.to_string(),
        columns::TITLE => issue.title.to_string(),
        columns::LLM_CATEGORY => issue.llm_category.to_string(),
        columns::LLM_SEVERITY => issue.llm_severity.to_string(),
        columns::LLM_TIME_SENSITIVITY => issue.llm_time_sensitivity.to_string(),
        columns::PRIORITY_SCORE => issue.priority_score.to_string(),
        columns::RISK_LEVEL => issue.risk_level.to_string(),
        columns::LLM_REASON => issue.llm_reason.to_string(),
        _ => String::new(),
    }
}

/// Render counts as a label column, a bar and the count.
fn format_counts(title: &str, counts: &[(&str, usize)]) -> Vec<String> {
    let mut lines = vec![format!("{title}:")];
    if counts.is_empty() {
        lines.push("  (none)".to_string());
        return lines;
    }
    let width = counts.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (label, count) in counts {
        let bar = "#".repeat(bar_len(*count, max));
        if bar.is_empty() {
            lines.push(format!("  {label:<width$}  {count}"));
        } else {
            lines.push(format!("  {label:<width$}  {bar} {count}"));
        }
    }
    lines
}

/// Bar length for `count`, scaled so the largest bar fits in `BAR_WIDTH`.
fn bar_len(count: usize, max: usize) -> usize {
    if max <= BAR_WIDTH {
        count
    } else {
        (count * BAR_WIDTH / max).max(usize::from(count > 0))
    }
}

/// Render a full dashboard report.
///
/// Output format:
/// ```text
/// Total Issues: 50
/// High Risk: 7
/// Avg Priority Score: 48
/// Max Priority Score: 100
///
/// Top 10 High-Risk Issues:
/// ticket_id  title  ...
///
/// Issues by Category:
///   Outage/Incident  ####### 7
///
/// Issues by Risk Level:
///   High  ####### 7
///
/// Prioritized Issue List:
/// ticket_id  title  ...
/// ```
pub fn format_report(report: &Report<'_>) -> String {
    let mut out = vec![
        format!("Total Issues: {}", report.kpis.total),
        format!("High Risk: {}", report.kpis.high_risk),
        format!("Avg Priority Score: {}", report.kpis.average_score),
        format!("Max Priority Score: {}", report.kpis.max_score),
        String::new(),
        format!("Top {} High-Risk Issues:", report.top_limit),
    ];
    if report.top_high_risk.is_empty() {
        out.push("No High-Risk issues match the current filters.".to_string());
    } else {
        out.push(format_issues(&report.top_high_risk, HIGH_RISK_COLUMNS));
    }

    let categories: Vec<(&str, usize)> = report
        .by_category
        .iter()
        .map(|c| (c.label, c.count))
        .collect();
    let risks: Vec<(&str, usize)> = report
        .by_risk
        .iter()
        .map(|c| (c.label, c.count))
        .collect();
    out.push(String::new());
    out.extend(format_counts("Issues by Category", &categories));
    out.push(String::new());
    out.extend(format_counts("Issues by Risk Level", &risks));

    out.push(String::new());
    out.push("Prioritized Issue List:".to_string());
    if report.issues.is_empty() {
        out.push("No issues match the current filters.".to_string());
    } else {
        out.push(format_prioritized(&report.issues));
    }
    out.join("\n")
}

/// Format issue details for the show command.
///
/// Output format:
/// ```text
/// [GH-1] Crash on save
/// Category: Outage/Incident
/// Severity: 5
/// Time Sensitivity: High
/// Priority Score: 100
/// Risk Level: High
///
/// Description:
///     app crashes when saving
///
/// Why this score?
///   Reason: Rule-based classification on issue text
///   severity(60) + time(12) + category(15) + keywords(18) + state(0) = 100
/// ```
pub fn format_detail(detail: &IssueDetail<'_>) -> String {
    let mut out = vec![
        format!("[{}] {}", detail.ticket_id, detail.title),
        format!("Category: {}", detail.llm_category),
        format!("Severity: {}", detail.llm_severity),
        format!("Time Sensitivity: {}", detail.llm_time_sensitivity),
        format!("Priority Score: {}", detail.priority_score),
        format!("Risk Level: {}", detail.risk_level),
    ];

    if !detail.description.trim().is_empty() {
        out.push(String::new());
        out.push("Description:".to_string());
        for line in wrap_text(detail.description, WRAP_WIDTH).lines() {
            out.push(format!("    {line}"));
        }
    }

    out.push(String::new());
    out.push("Why this score?".to_string());
    out.push(format!("  Reason: {}", detail.llm_reason));
    match detail.score_breakdown {
        Some(breakdown) => out.push(format!("  {}", breakdown.trim())),
        None => out.push("  No score breakdown found.".to_string()),
    }
    out.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only views over a scored table: filters, KPIs, counts and lists.

use std::collections::BTreeMap;

use prio_core::record::columns;
use prio_core::{RiskLevel, Row, Table};
use serde::Serialize;

use crate::filter::{int_cell, FilterExpr};

/// Columns filled in when a scored table lacks them, with their values.
const DISPLAY_DEFAULTS: &[(&str, &str)] = &[
    (columns::PRIORITY_SCORE, "0"),
    (columns::RISK_LEVEL, "Low"),
    (columns::LLM_CATEGORY, "Other"),
    (columns::LLM_SEVERITY, "3"),
    (columns::LLM_TIME_SENSITIVITY, "Medium"),
    (columns::LLM_REASON, ""),
    (columns::SCORE_BREAKDOWN, ""),
    (columns::TITLE, ""),
    (columns::DESCRIPTION, ""),
];

/// Number of rows in the high-risk block.
pub const TOP_HIGH_RISK: usize = 10;

/// A scored table prepared for display.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Table,
}

/// Row selection. Empty sets select everything.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Keep rows whose category is one of these.
    pub categories: Vec<String>,
    /// Keep rows whose risk level is one of these.
    pub risk_levels: Vec<RiskLevel>,
    /// Keep rows scored at least this much.
    pub min_score: i64,
    /// Keep rows matching every expression.
    pub filters: Vec<FilterExpr>,
}

/// Rows selected by a [`Query`], in table order.
#[derive(Debug, Clone)]
pub struct View<'a> {
    rows: Vec<Row<'a>>,
}

/// Headline numbers for a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Kpis {
    pub total: usize,
    pub high_risk: usize,
    pub average_score: i64,
    pub max_score: i64,
}

/// Number of issues carrying one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Count<'a> {
    pub label: &'a str,
    pub count: usize,
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub kpis: Kpis,
    pub top_limit: usize,
    pub top_high_risk: Vec<IssueSummary<'a>>,
    pub by_category: Vec<Count<'a>>,
    pub by_risk: Vec<Count<'a>>,
    pub issues: Vec<IssueSummary<'a>>,
}

/// One line of a prioritized list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary<'a> {
    pub ticket_id: &'a str,
    pub title: &'a str,
    pub llm_category: &'a str,
    pub llm_severity: &'a str,
    pub llm_time_sensitivity: &'a str,
    pub priority_score: i64,
    pub risk_level: &'a str,
    pub llm_reason: &'a str,
}

/// Everything known about one ticket, for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueDetail<'a> {
    pub ticket_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub llm_category: &'a str,
    pub llm_severity: &'a str,
    pub llm_time_sensitivity: &'a str,
    pub priority_score: i64,
    pub risk_level: &'a str,
    pub llm_reason: &'a str,
    /// `None` when the table carries no breakdown for this row.
    pub score_breakdown: Option<&'a str>,
}

impl Dashboard {
    /// Wraps a scored table, filling in any missing display columns.
    pub fn new(mut table: Table) -> Self {
        for (column, default) in DISPLAY_DEFAULTS {
            if !table.has_column(column) {
                tracing::debug!(column, default, "filling missing column");
            }
            table.ensure_column(column, default);
        }
        Dashboard { table }
    }

    /// The underlying table, with display columns present.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Selects the rows matching `query`.
    pub fn select(&self, query: &Query) -> View<'_> {
        View {
            rows: self.table.rows().filter(|row| query.matches(row)).collect(),
        }
    }

    /// Looks up a ticket by id across the whole table.
    pub fn find(&self, ticket_id: &str) -> Option<IssueDetail<'_>> {
        self.table
            .rows()
            .find(|row| row.get(columns::TICKET_ID) == Some(ticket_id))
            .map(|row| IssueDetail::from_row(&row))
    }
}

impl Query {
    /// Whether a row passes every criterion.
    ///
    /// Rows with a blank category, an unrecognized risk level, or an
    /// unreadable score are never selected.
    pub fn matches(&self, row: &Row<'_>) -> bool {
        let category = row.get_or_empty(columns::LLM_CATEGORY);
        if category.is_empty() {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.iter().any(|c| c == category) {
            return false;
        }
        let Some(risk) = risk_of(row) else {
            return false;
        };
        if !self.risk_levels.is_empty() && !self.risk_levels.contains(&risk) {
            return false;
        }
        match clamped_score(row) {
            Some(score) if score >= self.min_score => {}
            _ => return false,
        }
        self.filters.iter().all(|f| f.matches(row))
    }
}

impl<'a> View<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total, high-risk count, truncated average and max score.
    pub fn kpis(&self) -> Kpis {
        let scores: Vec<i64> = self.rows.iter().map(score_of).collect();
        let total = scores.len();
        if total == 0 {
            return Kpis::default();
        }
        let sum: i64 = scores.iter().sum();
        Kpis {
            total,
            high_risk: self.rows.iter().filter(|r| risk_of(r) == Some(RiskLevel::High)).count(),
            average_score: sum / total as i64,
            max_score: scores.iter().copied().max().unwrap_or(0),
        }
    }

    /// Issue counts per category, most frequent first, ties by name.
    pub fn category_counts(&self) -> Vec<(&'a str, usize)> {
        let mut counts: BTreeMap<&'a str, usize> = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.get_or_empty(columns::LLM_CATEGORY)).or_default() += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Issue counts per risk level, High first, including empty levels.
    pub fn risk_counts(&self) -> Vec<(RiskLevel, usize)> {
        RiskLevel::ALL
            .iter()
            .map(|level| {
                let count = self
                    .rows
                    .iter()
                    .filter(|r| risk_of(r) == Some(*level))
                    .count();
                (*level, count)
            })
            .collect()
    }

    /// All rows, highest score first; ties keep table order.
    pub fn prioritized(&self) -> Vec<IssueSummary<'a>> {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|r| std::cmp::Reverse(score_of(r)));
        rows.iter().map(IssueSummary::from_row).collect()
    }

    /// Assembles the full dashboard with a high-risk block of `top_limit`.
    pub fn report(&self, top_limit: usize) -> Report<'a> {
        let count = |(label, count): (&'a str, usize)| Count { label, count };
        Report {
            kpis: self.kpis(),
            top_limit,
            top_high_risk: self.top_high_risk(top_limit),
            by_category: self.category_counts().into_iter().map(count).collect(),
            by_risk: self
                .risk_counts()
                .into_iter()
                .map(|(level, n)| count((level.as_str(), n)))
                .collect(),
            issues: self.prioritized(),
        }
    }

    /// The `n` highest-scored High-risk rows.
    pub fn top_high_risk(&self, n: usize) -> Vec<IssueSummary<'a>> {
        self.prioritized()
            .into_iter()
            .filter(|s| s.risk_level.parse::<RiskLevel>().ok() == Some(RiskLevel::High))
            .take(n)
            .collect()
    }
}

impl<'a> IssueSummary<'a> {
    fn from_row(row: &Row<'a>) -> Self {
        IssueSummary {
            ticket_id: row.get_or_empty(columns::TICKET_ID),
            title: row.get_or_empty(columns::TITLE),
            llm_category: row.get_or_empty(columns::LLM_CATEGORY),
            llm_severity: row.get_or_empty(columns::LLM_SEVERITY),
            llm_time_sensitivity: row.get_or_empty(columns::LLM_TIME_SENSITIVITY),
            priority_score: score_of(row),
            risk_level: row.get_or_empty(columns::RISK_LEVEL),
            llm_reason: row.get_or_empty(columns::LLM_REASON),
        }
    }
}

impl<'a> IssueDetail<'a> {
    fn from_row(row: &Row<'a>) -> Self {
        let breakdown = row.get_or_empty(columns::SCORE_BREAKDOWN);
        IssueDetail {
            ticket_id: row.get_or_empty(columns::TICKET_ID),
            title: row.get_or_empty(columns::TITLE),
            description: row.get_or_empty(columns::DESCRIPTION),
            llm_category: row.get_or_empty(columns::LLM_CATEGORY),
            llm_severity: row.get_or_empty(columns::LLM_SEVERITY),
            llm_time_sensitivity: row.get_or_empty(columns::LLM_TIME_SENSITIVITY),
            priority_score: score_of(row),
            risk_level: row.get_or_empty(columns::RISK_LEVEL),
            llm_reason: row.get_or_empty(columns::LLM_REASON),
            score_breakdown: Some(breakdown).filter(|b| !b.trim().is_empty()),
        }
    }
}

/// Score cell held to `0..=100`.
fn clamped_score(row: &Row<'_>) -> Option<i64> {
    int_cell(row, columns::PRIORITY_SCORE).map(|score| score.clamp(0, 100))
}

fn score_of(row: &Row<'_>) -> i64 {
    clamped_score(row).unwrap_or(0)
}

fn risk_of(row: &Row<'_>) -> Option<RiskLevel> {
    row.get_or_empty(columns::RISK_LEVEL).parse().ok()
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;

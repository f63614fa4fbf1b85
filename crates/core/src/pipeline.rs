// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record pipeline: classify, score and bucket every row of a table.
//!
//! Two stages mirror the two steps an operator runs:
//!
//! 1. [`Pipeline::label`] attaches `llm_category`, `llm_severity`,
//!    `llm_time_sensitivity`, `llm_reason` and `label_source`.
//! 2. [`Pipeline::score`] reads those columns back (tolerating missing or
//!    malformed cells), attaches `priority_score`, `score_breakdown` and
//!    `risk_level`, and orders rows by score.
//!
//! Each row is computed from that row alone. Rerunning a stage overwrites
//! its columns, so the pipeline is idempotent.

use crate::classify::classify;
use crate::error::Result;
use crate::label::Label;
use crate::policy::Policy;
use crate::record::{columns, issue_text};
use crate::score::{score, Score, ScoreInput};
use crate::table::{Row, Table};

/// Applies a [`Policy`] to tables of issue records.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'p> {
    policy: &'p Policy,
}

impl<'p> Pipeline<'p> {
    pub fn new(policy: &'p Policy) -> Self {
        Pipeline { policy }
    }

    /// Label a single row from its title and description.
    pub fn label_row(&self, row: &Row<'_>) -> Label {
        let text = issue_text(
            row.get_or_empty(columns::TITLE),
            row.get_or_empty(columns::DESCRIPTION),
        );
        classify(self.policy, &text)
    }

    /// Score a single row from whatever label columns it carries.
    pub fn score_row(&self, row: &Row<'_>) -> Score {
        let input = ScoreInput {
            severity: row.get(columns::LLM_SEVERITY),
            time_sensitivity: row.get(columns::LLM_TIME_SENSITIVITY),
            category: row.get(columns::LLM_CATEGORY),
            title: row.get_or_empty(columns::TITLE),
            description: row.get_or_empty(columns::DESCRIPTION),
            state: row.get(columns::STATE),
        };
        score(self.policy, &input)
    }

    /// Label stage. Returns the number of rows labeled.
    pub fn label(&self, table: &mut Table) -> Result<usize> {
        let labels: Vec<Label> = table.rows().map(|row| self.label_row(&row)).collect();

        let mut category = Vec::with_capacity(labels.len());
        let mut severity = Vec::with_capacity(labels.len());
        let mut time = Vec::with_capacity(labels.len());
        let mut reason = Vec::with_capacity(labels.len());
        let mut source = Vec::with_capacity(labels.len());
        for label in labels {
            category.push(label.category);
            severity.push(label.severity.to_string());
            time.push(label.time_sensitivity.to_string());
            reason.push(label.reason);
            source.push(label.source);
        }

        let count = category.len();
        table.set_column(columns::LLM_CATEGORY, category)?;
        table.set_column(columns::LLM_SEVERITY, severity)?;
        table.set_column(columns::LLM_TIME_SENSITIVITY, time)?;
        table.set_column(columns::LLM_REASON, reason)?;
        table.set_column(columns::LABEL_SOURCE, source)?;
        tracing::debug!(rows = count, "labeled table");
        Ok(count)
    }

    /// Score stage. Returns the number of rows scored. Rows end up ordered
    /// by `priority_score`, highest first, ties in input order.
    pub fn score(&self, table: &mut Table) -> Result<usize> {
        let scores: Vec<Score> = table.rows().map(|row| self.score_row(&row)).collect();

        let mut priority = Vec::with_capacity(scores.len());
        let mut breakdown = Vec::with_capacity(scores.len());
        let mut risk = Vec::with_capacity(scores.len());
        for s in &scores {
            priority.push(s.priority_score.to_string());
            breakdown.push(s.to_string());
            risk.push(s.risk_level.to_string());
        }

        let count = scores.len();
        table.set_column(columns::PRIORITY_SCORE, priority)?;
        table.set_column(columns::SCORE_BREAKDOWN, breakdown)?;
        table.set_column(columns::RISK_LEVEL, risk)?;
        table.sort_desc_by_key(|row| priority_of(&row));
        tracing::debug!(rows = count, "scored table");
        Ok(count)
    }

    /// Both stages in sequence.
    pub fn run(&self, table: &mut Table) -> Result<usize> {
        self.label(table)?;
        self.score(table)
    }
}

/// Parsed `priority_score` cell; missing or unreadable cells count as 0.
pub fn priority_of(row: &Row<'_>) -> u8 {
    row.get(columns::PRIORITY_SCORE)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

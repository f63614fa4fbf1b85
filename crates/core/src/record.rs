// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Column names that form the table schema, and the issue text helper.

/// Column names. Derived column names are a contract with dashboards and
/// exporters and must not change.
pub mod columns {
    pub const TICKET_ID: &str = "ticket_id";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const CREATED_DATE: &str = "created_date";
    pub const STATE: &str = "state";

    pub const LLM_CATEGORY: &str = "llm_category";
    pub const LLM_SEVERITY: &str = "llm_severity";
    pub const LLM_TIME_SENSITIVITY: &str = "llm_time_sensitivity";
    pub const LLM_REASON: &str = "llm_reason";
    pub const LABEL_SOURCE: &str = "label_source";

    pub const PRIORITY_SCORE: &str = "priority_score";
    pub const SCORE_BREAKDOWN: &str = "score_breakdown";
    pub const RISK_LEVEL: &str = "risk_level";
}

/// Title and description joined by a single space.
pub fn issue_text(title: &str, description: &str) -> String {
    format!("{title} {description}")
}

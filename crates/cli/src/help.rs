// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let literal = fg(colors::codes::LITERAL);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_pipeline}
  {label}       Classify raw issues (category, severity, urgency)
  {score}       Score labeled issues and assign risk levels
  {run}         Label and score in one step

{header_review}
  {dashboard}   Show KPIs, counts and the prioritized list
  {top}         List the highest-scored issues
  {show}        Explain one issue's score

{header_setup}
  {policy}      Print the effective scoring policy
  {completion}  Generate shell completions
",
        header_pipeline = colors::header("Pipeline:"),
        header_review = colors::header("Review:"),
        header_setup = colors::header("Setup:"),
        label = colors::literal("label"),
        score = colors::literal("score"),
        run = colors::literal("run"),
        dashboard = colors::literal("dashboard"),
        top = colors::literal("top"),
        show = colors::literal("show"),
        policy = colors::literal("policy"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  prio run                 Label and score data/github_issues_raw.csv
  prio dashboard           Review the scored issues
  prio show <ticket_id>    See why an issue scored what it did",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;

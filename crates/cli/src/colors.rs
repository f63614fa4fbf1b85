// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used in help output.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and descriptions: medium grey
    pub const CONTEXT: u8 = 245;
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples help block.
///
/// ```text
/// Examples:
///   prio run -n 50          Label and score the first 50 issues
///   prio show <ticket_id>   Explain one score
/// ```
///
/// Lines ending in `:` become headers. On example lines the command (text
/// before a run of two or more spaces) is a literal, with `<placeholders>` in
/// context color.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{indent}{}{desc}", colorize_command(cmd)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Colorize a command, dimming `<placeholder>` words.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.is_empty() {
                String::new()
            } else if word.starts_with('<') && word.ends_with('>') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (at a run of 2+ spaces).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    if line[start..].trim().is_empty() {
        None
    } else {
        Some(start)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;

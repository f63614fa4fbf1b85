// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn paint_wraps_text_in_escape_and_reset() {
    assert_eq!(header("Examples:"), "\x1b[38;5;74mExamples:\x1b[0m");
    assert_eq!(literal("prio"), "\x1b[38;5;250mprio\x1b[0m");
    assert_eq!(context("<id>"), "\x1b[38;5;245m<id>\x1b[0m");
}

#[parameterized(
    example = { "prio run -n 50   Label and score", Some(14) },
    single_spaces = { "prio run -n 50", None },
    trailing_spaces = { "prio run   ", None },
    empty = { "", None },
)]
fn description_start(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}

#[test]
fn colorize_command_dims_placeholders() {
    let out = colorize_command("prio show <ticket_id>");
    assert_eq!(
        out,
        format!("{} {} {}", literal("prio"), literal("show"), context("<ticket_id>"))
    );
}

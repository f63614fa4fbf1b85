// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::CommandFactory;

/// Every visible subcommand must be listed in the custom commands block.
#[test]
fn all_subcommands_in_help() {
    std::env::set_var("NO_COLOR", "1");
    let cmd = crate::Cli::command();
    let help_text = commands();

    for sub in cmd.get_subcommands() {
        if sub.is_hide_set() {
            continue;
        }
        let name = sub.get_name();
        assert!(
            help_text.contains(&format!("  {name} ")),
            "Command '{name}' missing from help output"
        );
    }
}

#[test]
fn quickstart_is_plain_without_color() {
    std::env::set_var("NO_COLOR", "1");
    let text = quickstart();
    assert!(text.starts_with("Get started:"));
    assert!(!text.contains('\x1b'));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timing output for debugging slow batches.
//!
//! Enable with `PRIO_TIMINGS=1`. Output goes to stderr in format:
//! `[timings] phase::name XXms`

use std::time::Instant;

use crate::env;

/// Print a timing result to stderr if timings are enabled.
#[inline]
pub fn print_timing(phase: &str, start: Instant) {
    if env::prio_timings() {
        eprintln!("[timings] {} {}ms", phase, start.elapsed().as_millis());
    }
}

/// Macro for timing a block of code.
///
/// Usage:
/// ```rust,ignore
/// let table = time_phase!("io::read", { io::read_table(&path)? });
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::print_timing($phase, __start);
        __result
    }};
}

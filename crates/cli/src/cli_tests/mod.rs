// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// CLI parsing tests, split by topic.

use super::*;

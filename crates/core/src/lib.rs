// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! prio-core: Labeling and priority scoring for issue-tracker records
//!
//! This crate holds the pure rule engine used by the `prio` CLI: the
//! tunable [`Policy`] tables, the keyword classifier, the priority scorer,
//! the risk bucketizer, and the tabular pipeline that attaches all derived
//! fields to a batch of records. Nothing here performs I/O.

pub mod classify;
pub mod error;
pub mod label;
pub mod pipeline;
pub mod policy;
pub mod record;
pub mod risk;
pub mod score;
pub mod table;

pub use classify::classify;
pub use error::{Error, Result};
pub use label::{Label, TimeSensitivity};
pub use pipeline::Pipeline;
pub use policy::Policy;
pub use risk::{RiskLevel, RiskThresholds};
pub use score::{score, Breakdown, Score, ScoreInput};
pub use table::{Row, Table};

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use similar_asserts::assert_eq;
use tempfile::TempDir;

const RAW: &str = "\
ticket_id,created_date,title,description
GH-1,2025-01-02,\"Crash, then hang\",\"line one
line two\"
GH-2,2025-01-03,Plain title,
";

#[test]
fn read_handles_quotes_and_multiline_cells() {
    let table = read_table_from(RAW.as_bytes()).unwrap();
    assert_eq!(table.len(), 2);
    let first = table.row(0).unwrap();
    assert_eq!(first.get("title"), Some("Crash, then hang"));
    assert_eq!(first.get("description"), Some("line one\nline two"));
    assert_eq!(table.row(1).unwrap().get("description"), Some(""));
}

#[test]
fn write_then_read_preserves_cells() {
    let table = read_table_from(RAW.as_bytes()).unwrap();
    let mut out = Vec::new();
    write_table_to(&mut out, &table).unwrap();
    let again = read_table_from(out.as_slice()).unwrap();
    assert_eq!(again, table);
}

#[test]
fn read_rejects_ragged_rows() {
    let err = read_table_from("a,b\n1,2,3\n".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Csv(_)));
}

#[test]
fn read_rejects_duplicate_headers() {
    let err = read_table_from("a,a\n1,2\n".as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(prio_core::Error::DuplicateColumn(_))
    ));
}

#[test]
fn stage_input_missing_reports_hint() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("labeled.csv");
    let err = read_stage_input(&path, "run 'prio label' first").unwrap_err();
    match err {
        Error::MissingInput { path: p, hint } => {
            assert!(p.ends_with("labeled.csv"));
            assert_eq!(hint, "run 'prio label' first");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn write_table_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data/out/scored.csv");
    let table = read_table_from(RAW.as_bytes()).unwrap();
    write_table(&path, &table).unwrap();
    assert_eq!(read_table(&path).unwrap(), table);
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSV persistence for pipeline tables.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use prio_core::Table;

use crate::error::{Error, Result};

/// Reads a table that an earlier stage should have produced.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] with `hint` when the file does not exist,
/// so the operator learns which step to run first.
pub fn read_stage_input(path: &Path, hint: &str) -> Result<Table> {
    if !path.is_file() {
        return Err(Error::MissingInput {
            path: path.display().to_string(),
            hint: hint.to_string(),
        });
    }
    let table = crate::time_phase!("io::read", { read_table(path)? });
    tracing::info!(path = %path.display(), rows = table.len(), "read table");
    Ok(table)
}

/// Reads a CSV file with a header row.
pub fn read_table(path: &Path) -> Result<Table> {
    read_table_from(BufReader::new(File::open(path)?))
}

/// Reads CSV with a header row from any reader.
pub fn read_table_from<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut table = Table::new(headers)?;
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(str::to_string).collect())?;
    }
    Ok(table)
}

/// Writes a table as CSV, creating parent directories as needed.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    crate::time_phase!("io::write", { write_table_to(&mut writer, table)? });
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = table.len(), "wrote table");
    Ok(())
}

/// Writes a table as CSV to any writer.
pub fn write_table_to<W: Write>(writer: W, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.cells())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;

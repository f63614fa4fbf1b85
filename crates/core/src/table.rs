// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! An in-memory flat table: named columns, rows of string cells.
//!
//! This is the shape records travel in between pipeline stages. Unknown
//! columns are carried through untouched; derived columns are appended, or
//! replaced in place when they already exist.

use std::cmp::Reverse;

use crate::error::{Error, Result};

/// A rectangular table of string cells with unique column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// A borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> Row<'a> {
    /// Cell value for a column, or `None` if the table has no such column.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
    }

    /// Cell value for a column, or `""` if the column is absent.
    pub fn get_or_empty(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }

    /// All cells in column order.
    pub fn cells(&self) -> &'a [String] {
        self.cells
    }
}

impl Table {
    /// Creates an empty table with the given columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateColumn`] if a column name repeats.
    pub fn new(headers: Vec<String>) -> Result<Self> {
        for (i, header) in headers.iter().enumerate() {
            if headers[..i].contains(header) {
                return Err(Error::DuplicateColumn(header.clone()));
            }
        }
        Ok(Table {
            headers,
            rows: Vec::new(),
        })
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowWidth`] if the row does not have one cell per column.
    pub fn push_row(&mut self, cells: Vec<String>) -> Result<()> {
        if cells.len() != self.headers.len() {
            return Err(Error::RowWidth {
                row: self.rows.len() + 1,
                expected: self.headers.len(),
                found: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Row at `index`, if any.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }

    /// Iterates rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }

    /// Sets a column to `values`, replacing it in place if it exists and
    /// appending it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnLength`] unless there is one value per row.
    pub fn set_column(&mut self, column: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(Error::ColumnLength {
                column: column.to_string(),
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        match self.headers.iter().position(|h| h == column) {
            Some(i) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[i] = value;
                }
            }
            None => {
                self.headers.push(column.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// Appends `column` filled with `default` unless it already exists.
    pub fn ensure_column(&mut self, column: &str, default: &str) {
        if self.has_column(column) {
            return;
        }
        self.headers.push(column.to_string());
        for row in &mut self.rows {
            row.push(default.to_string());
        }
    }

    /// Keeps only the first `n` rows.
    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }

    /// Stable sort, largest key first. Rows with equal keys keep their order.
    pub fn sort_desc_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(Row<'_>) -> K,
    {
        let Table { headers, rows } = self;
        let headers = headers.as_slice();
        rows.sort_by_cached_key(|cells| {
            Reverse(key(Row {
                headers,
                cells: cells.as_slice(),
            }))
        });
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;

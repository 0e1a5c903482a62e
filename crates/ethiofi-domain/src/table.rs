//! Tabular data - the in-memory shape of one worksheet

use crate::cell::CellValue;
use std::collections::BTreeMap;

/// An ordered list of named fields
///
/// Records flatten into rows; field order is the column order the record
/// contributes when rows are turned into a [`Table`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, CellValue)>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field append
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a field, replacing an existing value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Field names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A table of cells with named, ordered columns
///
/// Every row has exactly `columns.len()` cells and column names are unique.
/// Construction from rows and concatenation both take the union of columns in
/// first-seen order and fill the gaps with [`CellValue::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given columns
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns: dedupe_columns(columns),
            rows: Vec::new(),
        }
    }

    /// Build a table from rows of aligned cells
    ///
    /// Rows shorter than the header are padded with blanks; longer rows are
    /// truncated to the header width. A repeated header name gets a `.N`
    /// suffix (`notes`, `notes.1`) so every column stays addressable.
    pub fn from_cells(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let columns = dedupe_columns(columns);
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Build a table from a list of records flattened into rows
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Row>,
    {
        let rows: Vec<Row> = rows.into_iter().collect();
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.to_string());
                }
            }
        }

        let cells = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| row.get(c).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows: cells,
        }
    }

    /// Stack tables vertically
    ///
    /// Columns are the union of all inputs in first-seen order, so the first
    /// table's columns lead. Rows keep table order, then row order. Tables
    /// with neither rows nor columns contribute nothing.
    pub fn concat(tables: &[&Table]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for table in tables {
            for column in &table.columns {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }

        let mut rows = Vec::with_capacity(tables.iter().map(|t| t.len()).sum());
        for table in tables {
            let mapping: Vec<Option<usize>> = columns
                .iter()
                .map(|c| table.column_index(c))
                .collect();
            for row in &table.rows {
                rows.push(
                    mapping
                        .iter()
                        .map(|idx| idx.map(|i| row[i].clone()).unwrap_or_default())
                        .collect(),
                );
            }
        }

        Self { columns, rows }
    }

    /// Column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// True when the table has the named column
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at `(row, column)`; `None` if either is out of range or unknown
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Raw rows aligned to [`Table::columns`]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Row `index` as a named [`Row`]
    pub fn row(&self, index: usize) -> Option<Row> {
        self.rows.get(index).map(|cells| {
            let mut row = Row::new();
            for (column, value) in self.columns.iter().zip(cells) {
                row.set(column.clone(), value.clone());
            }
            row
        })
    }

    /// All values of one column (empty when the column is absent)
    pub fn column_values(&self, name: &str) -> Vec<&CellValue> {
        match self.column_index(name) {
            Some(idx) => self.rows.iter().map(|r| &r[idx]).collect(),
            None => Vec::new(),
        }
    }

    /// Append a row given as named fields
    ///
    /// Unknown fields add new columns (existing rows get blanks).
    pub fn push_row(&mut self, row: &Row) {
        for key in row.keys() {
            if !self.has_column(key) {
                self.columns.push(key.to_string());
                for existing in &mut self.rows {
                    existing.push(CellValue::Empty);
                }
            }
        }
        let cells = self
            .columns
            .iter()
            .map(|c| row.get(c).cloned().unwrap_or_default())
            .collect();
        self.rows.push(cells);
    }

    /// Count occurrences of each non-missing value in a column
    ///
    /// Values are keyed by their display form. A missing column yields an
    /// empty map rather than an error.
    pub fn value_counts(&self, column: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for value in self.column_values(column) {
            if value.is_missing() {
                continue;
            }
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of distinct non-missing values in a column
    pub fn distinct_count(&self, column: &str) -> usize {
        self.value_counts(column).len()
    }

    /// Number of rows whose `column` equals the given text
    pub fn count_where(&self, column: &str, text: &str) -> usize {
        self.column_values(column)
            .into_iter()
            .filter(|v| v.as_text() == Some(text))
            .count()
    }

    /// Keep the rows for which `predicate` returns true
    pub fn filter<F>(&self, mut predicate: F) -> Table
    where
        F: FnMut(&Table, usize) -> bool,
    {
        let rows = (0..self.len())
            .filter(|&i| predicate(self, i))
            .map(|i| self.rows[i].clone())
            .collect();
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }
}

fn dedupe_columns(columns: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(columns.len());
    for name in columns {
        if !out.contains(&name) {
            out.push(name);
            continue;
        }
        let mut n = 1;
        while out.contains(&format!("{}.{}", name, n)) {
            n += 1;
        }
        out.push(format!("{}.{}", name, n));
    }
    out
}

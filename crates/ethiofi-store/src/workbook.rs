//! Two-sheet xlsx persistence
//!
//! Reading maps worksheet cells onto [`CellValue`]s with the first row as
//! the header. Writing emits a bold header row followed by the values; no
//! index column is written.

use crate::config::SheetNames;
use crate::error::StoreError;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::NaiveDateTime;
use ethiofi_domain::{CellValue, Dataset, Table};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::{debug, warn};

/// Read both sheets of a dataset workbook
///
/// # Errors
///
/// [`StoreError::NotFound`] if `path` does not exist,
/// [`StoreError::Workbook`] if the file cannot be parsed or a sheet is
/// missing.
pub fn read_dataset(path: &Path, sheets: SheetNames) -> Result<Dataset, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let data = sheet_to_table(&workbook.worksheet_range(sheets.main)?);
    let impact_links = sheet_to_table(&workbook.worksheet_range(sheets.impact_links)?);

    debug!(
        path = %path.display(),
        main_rows = data.len(),
        impact_rows = impact_links.len(),
        "Workbook read"
    );

    Ok(Dataset::new(data, impact_links))
}

/// Write both tables of `dataset` to a new workbook at `path`
///
/// An existing file is overwritten.
pub fn write_dataset(path: &Path, dataset: &Dataset, sheets: SheetNames) -> Result<(), StoreError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    write_sheet(
        workbook.add_worksheet(),
        sheets.main,
        &dataset.data,
        &header,
        &date_format,
    )?;
    write_sheet(
        workbook.add_worksheet(),
        sheets.impact_links,
        &dataset.impact_links,
        &header,
        &date_format,
    )?;

    workbook.save(path)?;
    debug!(path = %path.display(), "Workbook written");
    Ok(())
}

fn sheet_to_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(idx, cell)| header_name(idx, cell))
            .collect(),
        None => return Table::default(),
    };

    let cells = rows
        .map(|row| row.iter().map(to_cell).collect::<Vec<_>>())
        .collect();

    Table::from_cells(columns, cells)
}

fn header_name(idx: usize, cell: &Data) -> String {
    match to_cell(cell) {
        CellValue::Empty => format!("Unnamed: {}", idx),
        CellValue::Text(s) if s.is_empty() => format!("Unnamed: {}", idx),
        other => other.to_string(),
    }
}

fn to_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Float(dt.as_f64())),
        Data::DateTimeIso(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .map(CellValue::DateTime)
            .unwrap_or_else(|_| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => {
            warn!(error = ?e, "Worksheet cell holds an error value, reading as blank");
            CellValue::Empty
        }
    }
}

fn write_sheet(
    sheet: &mut Worksheet,
    name: &str,
    table: &Table,
    header: &Format,
    date_format: &Format,
) -> Result<(), StoreError> {
    sheet.set_name(name)?;

    for (col, column) in table.columns().iter().enumerate() {
        sheet.write_string_with_format(0, col_num(col)?, column, header)?;
    }

    for (idx, row) in table.rows().iter().enumerate() {
        let row_num = row_num(idx + 1)?;
        for (col, cell) in row.iter().enumerate() {
            let col = col_num(col)?;
            match cell {
                CellValue::Empty => {}
                CellValue::Bool(b) => {
                    sheet.write_boolean(row_num, col, *b)?;
                }
                CellValue::Int(i) => {
                    sheet.write_number(row_num, col, *i as f64)?;
                }
                CellValue::Float(f) if f.is_finite() => {
                    sheet.write_number(row_num, col, *f)?;
                }
                CellValue::Float(_) => {}
                CellValue::Text(s) => {
                    sheet.write_string(row_num, col, s)?;
                }
                CellValue::DateTime(dt) => {
                    sheet.write_datetime_with_format(row_num, col, dt, date_format)?;
                }
            }
        }
    }

    Ok(())
}

fn row_num(idx: usize) -> Result<u32, StoreError> {
    u32::try_from(idx).map_err(|_| StoreError::InvalidData(format!("Row {} exceeds worksheet limits", idx)))
}

fn col_num(idx: usize) -> Result<u16, StoreError> {
    u16::try_from(idx)
        .map_err(|_| StoreError::InvalidData(format!("Column {} exceeds worksheet limits", idx)))
}

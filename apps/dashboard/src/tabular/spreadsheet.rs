use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::models::table::Table;
use crate::tabular::TableError;

/// Reads the first worksheet of an in-memory workbook (xlsx, xls, xlsb or ods).
/// The first row is the header.
pub fn parse_workbook(bytes: &[u8]) -> Result<Table, TableError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| TableError::Spreadsheet(format!("failed to open workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TableError::Spreadsheet("no worksheet found".to_string()))?
        .map_err(|e| TableError::Spreadsheet(format!("failed to read worksheet: {e}")))?;

    let mut rows = range.rows();
    let columns: Vec<String> = rows
        .next()
        .map(|header| header.iter().map(cell_text).collect())
        .unwrap_or_default();
    if columns.is_empty() {
        return Err(TableError::NoColumns);
    }

    let rows = rows
        .map(|row| {
            let mut cells: Vec<String> = row.iter().map(cell_text).collect();
            cells.resize(columns.len(), String::new());
            cells
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

use std::borrow::Cow;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::models::table::Table;
use crate::tabular::TableError;

/// Decodes bytes as strict UTF-8, dropping a leading byte-order mark.
pub fn decode_utf8(bytes: &[u8]) -> Result<&str, TableError> {
    let text = std::str::from_utf8(bytes).map_err(|_| TableError::Encoding("UTF-8"))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Decodes bytes as ISO-8859-1: each byte becomes the code point of the same
/// value. Every byte sequence is valid, so this never fails.
pub fn decode_latin1(bytes: &[u8]) -> Cow<'_, str> {
    encoding_rs::mem::decode_latin1(bytes)
}

/// Parses delimited text whose first record is the header.
///
/// Blank lines are skipped. A record shorter than the header is padded with
/// empty cells; a longer one is a tokenizing error.
pub fn parse_delimited(content: &str, delimiter: u8) -> Result<Table, TableError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if columns.is_empty() {
        return Err(TableError::NoColumns);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() > columns.len() {
            return Err(TableError::TooManyFields {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: columns.len(),
                found: record.len(),
            });
        }
        let mut row: Vec<String> = record.iter().map(String::from).collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

/// Reads a UTF-8, comma-delimited file from disk.
pub fn read_csv_file(path: &Path) -> Result<Table, TableError> {
    let bytes = std::fs::read(path)?;
    parse_delimited(decode_utf8(&bytes)?, b',')
}

/// Serializes a table as comma-delimited text with a header row and no index column.
pub fn write_csv(table: &Table) -> Result<Vec<u8>, TableError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.into_inner().map_err(|e| TableError::Io(e.into_error()))
}

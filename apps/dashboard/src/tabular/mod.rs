//! Table parsing, header cleaning and CSV export shared by both dashboards.

pub mod delimited;
pub mod headers;
pub mod spreadsheet;

use thiserror::Error;

/// Why a source could not be turned into a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid {0}")]
    Encoding(&'static str),

    #[error("no columns to parse from file")]
    NoColumns,

    #[error("error tokenizing data: expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),
}

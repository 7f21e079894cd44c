//! Best-effort table loading for uploaded files.
//!
//! Strategies run in a fixed order and the first one that parses without an
//! error wins. A strategy that "succeeds" with a wrong shape is accepted as-is.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::table::Table;
use crate::tabular::delimited::{decode_latin1, decode_utf8, parse_delimited};
use crate::tabular::headers::strip_whitespace;
use crate::tabular::spreadsheet::parse_workbook;
use crate::tabular::TableError;

pub const AWAITING_UPLOAD: &str = "Upload a CSV or Excel file to begin analysis";
pub const UNREADABLE_UPLOAD: &str = "Unable to read file. Please upload a valid CSV/Excel file.";

/// One (encoding, delimiter, format) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStrategy {
    Utf8Comma,
    Latin1Comma,
    Latin1Tab,
    Spreadsheet,
}

/// Attempt order.
pub const STRATEGIES: &[ParseStrategy] = &[
    ParseStrategy::Utf8Comma,
    ParseStrategy::Latin1Comma,
    ParseStrategy::Latin1Tab,
    ParseStrategy::Spreadsheet,
];

impl ParseStrategy {
    pub fn describe(self) -> &'static str {
        match self {
            ParseStrategy::Utf8Comma => "UTF-8 CSV",
            ParseStrategy::Latin1Comma => "Latin-1 CSV",
            ParseStrategy::Latin1Tab => "Latin-1 tab-delimited",
            ParseStrategy::Spreadsheet => "spreadsheet",
        }
    }

    pub fn parse(self, bytes: &[u8]) -> Result<Table, TableError> {
        match self {
            ParseStrategy::Utf8Comma => parse_delimited(decode_utf8(bytes)?, b','),
            ParseStrategy::Latin1Comma => parse_delimited(&decode_latin1(bytes), b','),
            ParseStrategy::Latin1Tab => parse_delimited(&decode_latin1(bytes), b'\t'),
            ParseStrategy::Spreadsheet => parse_workbook(bytes),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// Sidebar message describing the load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadStatus {
    pub kind: StatusKind,
    pub message: String,
    pub strategy: Option<ParseStrategy>,
}

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub status: LoadStatus,
    pub table: Table,
}

/// Tries each strategy in order; `None` means no file was uploaded.
/// Failure always yields an empty table plus a message, never an error.
pub fn load_upload(upload: Option<&[u8]>) -> LoadOutcome {
    let Some(bytes) = upload else {
        return LoadOutcome {
            status: LoadStatus {
                kind: StatusKind::Info,
                message: AWAITING_UPLOAD.to_string(),
                strategy: None,
            },
            table: Table::default(),
        };
    };

    let mut last_error = None;
    for &strategy in STRATEGIES {
        match strategy.parse(bytes) {
            Ok(mut table) => {
                table.rename_columns(strip_whitespace);
                info!(
                    "Parsed upload as {}: {} rows, {} columns",
                    strategy.describe(),
                    table.row_count(),
                    table.column_count()
                );
                return LoadOutcome {
                    status: LoadStatus {
                        kind: StatusKind::Success,
                        message: format!(
                            "Loaded: {} rows, {} columns",
                            table.row_count(),
                            table.column_count()
                        ),
                        strategy: Some(strategy),
                    },
                    table,
                };
            }
            Err(e) => {
                debug!("Upload is not {}: {e}", strategy.describe());
                last_error = Some(e);
            }
        }
    }

    let detail = last_error
        .map(|e| format!(" ({e})"))
        .unwrap_or_default();
    warn!("Upload rejected by every parse strategy{detail}");
    LoadOutcome {
        status: LoadStatus {
            kind: StatusKind::Error,
            message: format!("{UNREADABLE_UPLOAD}{detail}"),
            strategy: None,
        },
        table: Table::default(),
    }
}

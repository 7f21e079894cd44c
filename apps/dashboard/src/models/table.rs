use serde::{Deserialize, Serialize};

/// In-memory rectangular dataset. Cells keep the exact source text; numeric
/// meaning is only read where a number is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at `(row, col)`. Missing trailing cells read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Appends a derived column, computing one value per row from that row's cells.
    pub fn push_column<F>(&mut self, name: impl Into<String>, mut derive: F)
    where
        F: FnMut(&[String]) -> String,
    {
        self.columns.push(name.into());
        let width = self.columns.len();
        for row in &mut self.rows {
            let value = derive(row);
            // pad short rows so the new value lands under its header
            row.resize(width - 1, String::new());
            row.push(value);
        }
    }

    /// New table with the same columns and only the rows accepted by `keep`.
    pub fn filter_rows<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&[String]) -> bool,
    {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    pub fn rename_columns<F>(&mut self, rename: F)
    where
        F: Fn(&str) -> String,
    {
        for column in &mut self.columns {
            *column = rename(column);
        }
    }
}

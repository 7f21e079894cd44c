use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::table::Table;
use crate::tabular::delimited::read_csv_file;
use crate::tabular::headers::normalize_identifier;
use crate::workforce::classifier::ensure_category_column;

/// Location of the workforce dataset, relative to the working directory.
pub const DATA_PATH: &str = "data/ihr_geo_data.csv";

/// Loads the dataset once per process and hands out the classified table.
///
/// A failed load is not remembered; the next call tries the file again.
pub struct WorkforceSource {
    path: PathBuf,
    cached: OnceCell<Arc<Table>>,
}

impl WorkforceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: OnceCell::new(),
        }
    }

    pub fn fixed() -> Self {
        Self::new(DATA_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> Result<Arc<Table>, AppError> {
        self.cached
            .get_or_try_init(|| load_prepared(&self.path).map(Arc::new))
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.get().is_some()
    }
}

/// Reads the CSV, normalizes headers and attaches the category column.
pub fn load_prepared(path: &Path) -> Result<Table, AppError> {
    let mut table = read_csv_file(path).map_err(|e| {
        error!("Workforce data load failed for {}: {e}", path.display());
        AppError::DataSource(format!(
            "Failed to load workforce data from '{}': {e}",
            path.display()
        ))
    })?;

    table.rename_columns(normalize_identifier);
    ensure_category_column(&mut table)?;

    info!(
        "Loaded workforce data from {}: {} rows, {} columns",
        path.display(),
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workforce::classifier::CATEGORY_COLUMN;

    const SAMPLE: &str = "Division Name,NIC Name,Main Workers - Total - Persons\n\
                          North,Poultry farm,10\n\
                          South,Retail trade,5\n";

    #[test]
    fn test_load_normalizes_and_classifies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geo.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let table = load_prepared(&path).unwrap();
        assert_eq!(
            table.columns,
            vec![
                "Division_Name",
                "NIC_Name",
                "Main_Workers__Total__Persons",
                CATEGORY_COLUMN
            ]
        );
        assert_eq!(table.cell(0, 3), "Poultry");
        assert_eq!(table.cell(1, 3), "Retail");
    }

    #[test]
    fn test_missing_file_is_a_data_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = WorkforceSource::new(dir.path().join("absent.csv"));
        match source.table() {
            Err(AppError::DataSource(msg)) => assert!(msg.contains("absent.csv")),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(!source.is_loaded());
    }

    #[test]
    fn test_table_is_cached_after_first_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geo.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let source = WorkforceSource::new(&path);
        let first = source.table().unwrap();
        std::fs::remove_file(&path).unwrap();
        let second = source.table().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_failed_load_retries_later() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.csv");
        let source = WorkforceSource::new(&path);
        assert!(source.table().is_err());

        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(source.table().unwrap().row_count(), 2);
    }
}

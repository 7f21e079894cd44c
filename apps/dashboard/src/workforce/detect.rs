use serde::Serialize;

use crate::errors::AppError;
use crate::models::table::Table;
use crate::workforce::classifier::CATEGORY_COLUMN;

/// Geography column used when no header looks like one.
pub const FALLBACK_GEOGRAPHY_COLUMN: &str = "Division";

pub const MISSING_WORKER_COLUMN: &str =
    "Could not detect a valid worker count column. Please check your dataset.";

/// Resolved column positions for one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct DetectedColumns {
    pub geography: String,
    pub industry: String,
    pub workers: String,
    #[serde(skip)]
    pub geography_idx: usize,
    #[serde(skip)]
    pub industry_idx: usize,
    #[serde(skip)]
    pub workers_idx: usize,
}

/// First header containing "Division" or "State" (case-sensitive), else "Division".
pub fn geography_column_name(columns: &[String]) -> &str {
    columns
        .iter()
        .find(|c| c.contains("Division") || c.contains("State"))
        .map(String::as_str)
        .unwrap_or(FALLBACK_GEOGRAPHY_COLUMN)
}

/// First header containing both "main" and "worker", ignoring case.
pub fn worker_column_name(columns: &[String]) -> Option<&str> {
    columns
        .iter()
        .find(|c| {
            let lowered = c.to_lowercase();
            lowered.contains("main") && lowered.contains("worker")
        })
        .map(String::as_str)
}

/// Detects the geography, industry and worker-count columns or halts with a
/// user-facing message.
pub fn detect_columns(table: &Table) -> Result<DetectedColumns, AppError> {
    let workers = worker_column_name(&table.columns)
        .ok_or_else(|| AppError::UnprocessableEntity(MISSING_WORKER_COLUMN.to_string()))?;
    let workers_idx = table.column_index(workers).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("detected column '{workers}' vanished"))
    })?;

    let geography = geography_column_name(&table.columns);
    let geography_idx = table.column_index(geography).ok_or_else(|| {
        AppError::UnprocessableEntity(format!(
            "Could not detect a geography column: no header contains 'Division' or 'State' \
             and no '{FALLBACK_GEOGRAPHY_COLUMN}' column exists."
        ))
    })?;

    let industry_idx = table.column_index(CATEGORY_COLUMN).ok_or_else(|| {
        AppError::UnprocessableEntity(format!("Column '{CATEGORY_COLUMN}' is missing."))
    })?;

    Ok(DetectedColumns {
        geography: geography.to_string(),
        industry: CATEGORY_COLUMN.to_string(),
        workers: workers.to_string(),
        geography_idx,
        industry_idx,
        workers_idx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_geography_prefers_first_match() {
        let c = cols(&["Id", "State_Code", "Division"]);
        assert_eq!(geography_column_name(&c), "State_Code");
    }

    #[test]
    fn test_geography_is_case_sensitive() {
        let c = cols(&["division", "state"]);
        assert_eq!(geography_column_name(&c), FALLBACK_GEOGRAPHY_COLUMN);
    }

    #[test]
    fn test_worker_column_needs_both_words() {
        let c = cols(&["Marginal_Workers", "MAIN_Workers_Total_Persons"]);
        assert_eq!(worker_column_name(&c), Some("MAIN_Workers_Total_Persons"));
        assert_eq!(worker_column_name(&cols(&["Main_Area", "Workers"])), None);
    }

    #[test]
    fn test_missing_worker_column_halts() {
        let t = Table::new(cols(&["Division", CATEGORY_COLUMN, "Total"]), vec![]);
        match detect_columns(&t) {
            Err(AppError::UnprocessableEntity(msg)) => assert_eq!(msg, MISSING_WORKER_COLUMN),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_absent_fallback_geography_is_reported() {
        let t = Table::new(cols(&["Region", CATEGORY_COLUMN, "Main_Workers"]), vec![]);
        assert!(matches!(
            detect_columns(&t),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_detect_resolves_indices() {
        let t = Table::new(
            cols(&["State", "NIC_Name", "Main_Workers_Total", CATEGORY_COLUMN]),
            vec![],
        );
        let d = detect_columns(&t).unwrap();
        assert_eq!(d.geography_idx, 0);
        assert_eq!(d.workers_idx, 2);
        assert_eq!(d.industry_idx, 3);
        assert_eq!(d.workers, "Main_Workers_Total");
    }
}

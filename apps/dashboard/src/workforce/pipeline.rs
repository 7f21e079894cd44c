use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::table::Table;
use crate::tabular::delimited::write_csv;
use crate::workforce::aggregate::{
    aggregate, distinct_values, filter_rows, AggregateRecord, ResolvedSelection, Selection,
};
use crate::workforce::detect::{detect_columns, DetectedColumns};
use crate::workforce::insights::{
    bar_chart, compute_metrics, pie_chart, BarChart, Metrics, PieChart,
};

/// Sidebar contents: the detected columns and every selectable value.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub columns: DetectedColumns,
    pub geographies: Vec<String>,
    pub industries: Vec<String>,
}

/// Everything the dashboard page renders for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub columns: DetectedColumns,
    pub selection: ResolvedSelection,
    pub filtered_rows: usize,
    pub aggregate: Vec<AggregateRecord>,
    pub bar_chart: BarChart,
    pub pie_chart: PieChart,
    pub metrics: Metrics,
}

pub fn filter_options(table: &Table) -> Result<FilterOptions, AppError> {
    let columns = detect_columns(table)?;
    Ok(FilterOptions {
        geographies: distinct_values(table, columns.geography_idx),
        industries: distinct_values(table, columns.industry_idx),
        columns,
    })
}

/// Filters the table to the selection and returns the surviving rows.
pub fn filtered_table(
    table: &Table,
    selection: &Selection,
) -> Result<(Table, DetectedColumns, ResolvedSelection), AppError> {
    let columns = detect_columns(table)?;
    let resolved = selection.resolve(table, &columns);
    let filtered = filter_rows(table, &columns, &resolved);
    debug!(
        "Selection kept {} of {} rows",
        filtered.row_count(),
        table.row_count()
    );
    Ok((filtered, columns, resolved))
}

pub fn build_dashboard(table: &Table, selection: &Selection) -> Result<DashboardView, AppError> {
    let (filtered, columns, resolved) = filtered_table(table, selection)?;
    let agg = aggregate(&filtered, &columns);

    Ok(DashboardView {
        bar_chart: bar_chart(&agg, &columns.geography, &columns.industry),
        pie_chart: pie_chart(&agg),
        metrics: compute_metrics(&agg),
        filtered_rows: filtered.row_count(),
        aggregate: agg,
        selection: resolved,
        columns,
    })
}

/// CSV bytes of the filtered, pre-aggregation rows.
pub fn export_filtered(table: &Table, selection: &Selection) -> Result<Vec<u8>, AppError> {
    let (filtered, _, _) = filtered_table(table, selection)?;
    write_csv(&filtered)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV export failed: {e}")))
}

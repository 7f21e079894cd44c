//! Axum route handlers for the workforce dashboard.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::workforce::aggregate::Selection;
use crate::workforce::pipeline::{build_dashboard, export_filtered, filter_options};
use crate::workforce::pipeline::{DashboardView, FilterOptions};

pub const EXPORT_FILENAME: &str = "filtered_data.csv";

/// GET /api/v1/workforce/filters
pub async fn handle_filters(
    State(state): State<AppState>,
) -> Result<Json<FilterOptions>, AppError> {
    let table = state.workforce.table()?;
    Ok(Json(filter_options(&table)?))
}

/// POST /api/v1/workforce/dashboard
///
/// Re-runs filter, aggregate and render for the posted selection. Missing
/// selections default to every value present.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<DashboardView>, AppError> {
    let table = state.workforce.table()?;
    let view = build_dashboard(&table, &selection).map_err(|e| {
        warn!("Workforce dashboard halted: {e}");
        e
    })?;
    Ok(Json(view))
}

/// POST /api/v1/workforce/export
///
/// Filtered rows before aggregation, as a CSV attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Response, AppError> {
    let table = state.workforce.table()?;
    let bytes = export_filtered(&table, &selection)?;
    info!("Exporting {} bytes of filtered workforce data", bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

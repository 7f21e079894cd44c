//! Axum route handlers for the HR analytics upload dashboard.

use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::table::Table;
use crate::uploads::strategies::{load_upload, LoadStatus};

/// File extensions the upload control accepts.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: Option<String>,
    pub status: LoadStatus,
    /// True while the dashboard is still waiting for usable data.
    pub is_empty: bool,
    /// Raw preview of the loaded data; empty when nothing could be read.
    pub table: Table,
}

/// POST /api/v1/hr/upload
///
/// Parses the multipart `file` field. A missing or unreadable file is not an
/// error: the response carries an empty table and a status message.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if filename.is_empty() && data.is_empty() {
            continue;
        }
        check_extension(&filename)?;
        upload = Some((filename, data));
    }

    let outcome = load_upload(upload.as_ref().map(|(_, data)| data.as_ref()));
    let filename = upload.map(|(name, _)| name);
    info!(
        "Upload {:?} finished: {:?} ({})",
        filename, outcome.status.kind, outcome.status.message
    );

    Ok(Json(UploadResponse {
        filename,
        status: outcome.status,
        is_empty: outcome.table.is_empty(),
        table: outcome.table,
    }))
}

fn check_extension(filename: &str) -> Result<(), AppError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Unsupported file type '{filename}'. Accepted: .csv, .xlsx, .xls"
        )))
    }
}

use crate::api::models::*;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::io::ErrorKind;
use tracing::info;

pub const DOWNLOAD_FILENAME: &str = "expenses.json";

/// Send the record file as-is; its contents are not re-parsed.
pub async fn download_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = state.store.path();

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound("File not found".to_string()));
        }
        Err(e) => {
            return Err(AppError::Internal(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )));
        }
    };

    info!(bytes = bytes.len(), "Serving record file download");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
            ),
        ],
        bytes,
    )
        .into_response())
}

use crate::api::models::*;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

/// Records are returned exactly as stored, including any keys added outside this service.
pub async fn list_records_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, AppError> {
    let records = state.store.load()?;

    info!(count = records.len(), "Listing records");

    Ok(Json(records))
}

pub async fn add_record_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let body = body?;

    // Validate
    let record = AddRecordRequest::from_body(&body)
        .and_then(AddRecordRequest::validate)
        .map_err(AppError::BadRequest)?;

    info!(title = %record.title, date = %record.date, "Adding record");

    let count = state.store.append(record)?;

    info!(count, "Record added");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Record added successfully".to_string(),
        }),
    ))
}

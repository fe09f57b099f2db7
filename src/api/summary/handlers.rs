use crate::api::models::*;
use crate::storage::Summary;
use axum::{extract::State, Json};
use tracing::info;

pub async fn summary_handler(State(state): State<AppState>) -> Result<Json<Summary>, AppError> {
    let records = state.store.load()?;
    let summary = Summary::from_records(&records);

    info!(count = summary.count, total = %summary.total, "Summary computed");

    Ok(Json(summary))
}

use crate::api::models::AppState;
use crate::api::records::handlers::{add_record_handler, list_records_handler};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/records", get(list_records_handler).post(add_record_handler))
}

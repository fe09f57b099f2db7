use crate::api::models::AppState;
use crate::api::summary::handlers::summary_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/summary", get(summary_handler))
}

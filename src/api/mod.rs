pub mod download;
pub mod models;
pub mod records;
pub mod summary;

// Re-exports
pub use models::*;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

// Health handler (simple, keep here)
pub async fn health_handler() -> &'static str {
    "ok"
}

/// Assemble every route group on top of the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(records::routes())
        .merge(summary::routes())
        .merge(download::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

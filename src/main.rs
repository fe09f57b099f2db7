mod api;
mod config;
mod storage;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::storage::JsonFileStorage;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the log level can come from it
    let config = AppConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("🚀 Starting Expense Records API Server");
    info!("📋 Configuration loaded");
    info!("   - Data file: {}", config.storage.data_path.display());
    info!("   - Server: {}", config.listen_addr());

    // Initialize record storage
    info!("💾 Initializing record storage...");
    let store = open_store(&config.storage.data_path)?;

    let state = AppState { store };
    let app = api::router(state);

    // Start server
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /healthz        - Health check");
    info!("   GET  /api/records    - List records");
    info!("   POST /api/records    - Add record");
    info!("   GET  /api/summary    - Record count and total amount");
    info!("   GET  /api/download   - Download expenses.json");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Only a failed initialization is fatal. An unreadable record file is
/// reported per request, and the download endpoint still serves it.
fn open_store(path: &Path) -> anyhow::Result<Arc<JsonFileStorage>> {
    let store = Arc::new(JsonFileStorage::new(path));
    store
        .initialize()
        .context("Failed to initialize record storage")?;

    match store.count() {
        Ok(count) => info!("✅ Record storage ready ({} records)", count),
        Err(e) => warn!("⚠️  Record file unreadable: {}", e),
    }

    Ok(store)
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}

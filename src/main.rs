// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::builder_service::BuilderService;
use crate::application::storage::BlobStorage;
use crate::infrastructure::config::{StorageBackend, load_app_config};
use crate::infrastructure::file_storage::FileStorage;
use crate::infrastructure::memory_storage::MemoryStorage;
use crate::presentation::app_state::AppState;
use crate::presentation::router::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create storage (infrastructure layer)
    let storage: Arc<dyn BlobStorage> = match app_config.storage.backend {
        StorageBackend::File => {
            let storage = FileStorage::new(app_config.storage.directory.clone());
            tracing::info!("Storing widgets and dashboards in {}", storage.directory().display());
            Arc::new(storage)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, nothing will survive a restart");
            Arc::new(MemoryStorage::new())
        }
    };

    // Load stores (application layer)
    let builder = BuilderService::load(storage).await?;

    // Build router (presentation layer)
    let router = create_router(Arc::new(AppState::new(builder)));

    // Start server
    let addr = app_config.server.bind_address().await?;
    tracing::info!("Starting dashboard-builder on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Keep serving rather than shutting down right away
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

//! Photodrop API Server
//!
//! Main entry point for the Photodrop upload-URL service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photodrop_api::{AppState, create_router};
use photodrop_core::storage::{StorageConfig, StorageProvider, StorageService};
use photodrop_core::upload::UploadService;
use photodrop_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photodrop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Construct the storage client once; it is shared read-only across
    // concurrent invocations.
    let uploads = match StorageProvider::from_settings(&config.storage) {
        Some(provider) => {
            info!(
                provider = provider.name(),
                bucket = provider.bucket(),
                "Storage configured"
            );
            let storage = StorageService::from_config(StorageConfig::new(provider))?;
            Some(Arc::new(UploadService::new(Arc::new(storage))))
        }
        None => {
            warn!("No upload bucket configured; upload requests will fail");
            None
        }
    };

    // Create application state
    let state = AppState { uploads };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

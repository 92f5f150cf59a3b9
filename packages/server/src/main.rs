// Main entry point for the scrape service

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use harvest::{DynamoJobTable, PageFetcher, S3ArtifactStore};
use server_core::{build_app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,harvest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GreenHub job scrape service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Construct pipeline dependencies (injected, not ambient globals)
    let fetcher = PageFetcher::new(&config.scrape).context("Failed to build HTTP client")?;
    let archive = S3ArtifactStore::from_env().await;
    let table = DynamoJobTable::from_env().await;
    tracing::info!("Storage clients ready");

    let state = AppState {
        scrape: config.scrape.clone(),
        fetcher: Arc::new(fetcher),
        archive: Arc::new(archive),
        table: Arc::new(table),
    };
    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

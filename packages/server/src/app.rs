//! Application setup and router construction.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use harvest::{ArtifactStore, Fetch, JobTable, ScrapeConfig};

use crate::routes::{health_handler, scrape_handler};

/// Shared application state: the scrape config plus the injected
/// pipeline dependencies, so tests can substitute in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub scrape: ScrapeConfig,
    pub fetcher: Arc<dyn Fetch>,
    pub archive: Arc<dyn ArtifactStore>,
    pub table: Arc<dyn JobTable>,
}

/// Build the axum application.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/scrape", post(scrape_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! HTTP entry point for the scrape pipeline.
//!
//! Exposes one invocation endpoint (`POST /scrape`) plus a health
//! check, wiring the `harvest` pipeline to S3 and DynamoDB backends.

pub mod app;
pub mod config;
pub mod routes;

pub use app::{build_app, AppState};
pub use config::Config;

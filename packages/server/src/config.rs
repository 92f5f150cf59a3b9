//! Application configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use harvest::ScrapeConfig;

/// Server settings plus the scrape destinations.
///
/// Every destination keeps its long-standing production default, so a
/// bare environment behaves exactly like the scheduled scraper always
/// has; set the variables to point elsewhere.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub scrape: ScrapeConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let mut scrape = ScrapeConfig::default();
        if let Ok(path) = env::var("LEDGER_PATH") {
            scrape = scrape.with_ledger_path(path);
        }
        if let Ok(bucket) = env::var("ARCHIVE_BUCKET") {
            scrape = scrape.with_bucket(bucket);
        }
        if let Ok(key) = env::var("ARCHIVE_OBJECT_KEY") {
            scrape = scrape.with_object_key(key);
        }
        if let Ok(table) = env::var("JOB_TABLE") {
            scrape = scrape.with_table_name(table);
        }
        if let Ok(origin) = env::var("BASE_ORIGIN") {
            scrape = scrape.with_base_origin(origin);
        }

        Ok(Self { port, scrape })
    }
}

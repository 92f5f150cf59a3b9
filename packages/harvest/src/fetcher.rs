//! Single-shot page fetch.
//!
//! One GET with a browser-like User-Agent and a bounded timeout. No
//! retry, no backoff; redirects only as far as the transport follows
//! them on its own.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::types::config::ScrapeConfig;

/// Seam for the page fetch so tests can substitute canned responses.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch the page body at `url`. Succeeds only on HTTP 200.
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}

/// HTTP fetcher backed by a `reqwest::Client`.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Build a fetcher from the config's user agent and timeout.
    pub fn new(config: &ScrapeConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self { client })
    }

    /// Fetcher with the production defaults.
    pub fn with_defaults() -> FetchResult<Self> {
        Self::new(&ScrapeConfig::default())
    }
}

#[async_trait]
impl Fetch for PageFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        debug!(url, "page fetch starting");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url, error = %e, "page fetch failed at transport level");
            FetchError::Transport(e)
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(url, status = status.as_u16(), "page fetch got non-200 status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(FetchError::Transport)
    }
}

//! Test doubles for driving the pipeline without network access.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::fetcher::Fetch;

enum CannedPage {
    Html(String),
    Status(u16),
}

/// Fetcher returning canned bodies or canned HTTP failures per URL.
/// URLs without a canned response behave like a 404.
///
/// # Example
///
/// ```rust,ignore
/// use harvest::testing::StaticFetcher;
///
/// let fetcher = StaticFetcher::new()
///     .with_page("https://example.com/jobs", "<html>...</html>")
///     .with_status("https://example.com/down", 503);
/// ```
#[derive(Default)]
pub struct StaticFetcher {
    pages: RwLock<HashMap<String, CannedPage>>,
}

impl StaticFetcher {
    /// Create a fetcher with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(url.into(), CannedPage::Html(html.into()));
        self
    }

    /// Answer `url` with a non-200 status.
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(url.into(), CannedPage::Status(status));
        self
    }
}

#[async_trait]
impl Fetch for StaticFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        match self.pages.read().unwrap().get(url) {
            Some(CannedPage::Html(html)) => Ok(html.clone()),
            Some(CannedPage::Status(status)) => Err(FetchError::Status { status: *status }),
            None => Err(FetchError::Status { status: 404 }),
        }
    }
}

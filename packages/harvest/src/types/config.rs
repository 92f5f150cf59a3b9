//! Invocation settings.

use std::path::PathBuf;
use std::time::Duration;

/// User-Agent sent with the page fetch. The source site serves different
/// markup to obvious bots, so the scraper identifies as a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/94.0.4606.61 Safari/537.36";

/// Origin prefixed onto relative job links.
pub const DEFAULT_BASE_ORIGIN: &str = "https://climatejobs.shortlist.net";

/// Bucket receiving the ledger snapshot.
pub const DEFAULT_BUCKET: &str = "greenhub-bucket";

/// Destination key inside the bucket; overwritten on every run.
pub const DEFAULT_OBJECT_KEY: &str = "Jobs/job_details.csv";

/// Key-value table receiving one item per record.
pub const DEFAULT_TABLE_NAME: &str = "JobScraperTable";

/// File name of the local CSV ledger, placed under the OS temp dir.
pub const DEFAULT_LEDGER_FILE: &str = "job_details.csv";

/// Settings for one scrape invocation.
///
/// Defaults reproduce the fixed destinations the scheduled scraper has
/// always used; everything is overridable for tests and alternate
/// deployments. Note that with the default ledger path under the temp
/// dir, a cold start loses the accumulated ledger and the next upload
/// reflects only that invocation's rows.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Local CSV ledger path. Appended to across invocations as long as
    /// the file survives; removed after every upload attempt.
    pub ledger_path: PathBuf,

    /// Object-storage bucket receiving the ledger snapshot.
    pub bucket: String,

    /// Destination key inside the bucket.
    pub object_key: String,

    /// Key-value table name.
    pub table_name: String,

    /// Origin prefixed onto relative job links.
    pub base_origin: String,

    /// User-Agent for the page fetch.
    pub user_agent: String,

    /// Page fetch timeout.
    pub timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            ledger_path: std::env::temp_dir().join(DEFAULT_LEDGER_FILE),
            bucket: DEFAULT_BUCKET.to_string(),
            object_key: DEFAULT_OBJECT_KEY.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ScrapeConfig {
    /// Create a config with the production defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the local ledger path.
    pub fn with_ledger_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_path = path.into();
        self
    }

    /// Set the destination bucket.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Set the destination object key.
    pub fn with_object_key(mut self, key: impl Into<String>) -> Self {
        self.object_key = key.into();
        self
    }

    /// Set the table name.
    pub fn with_table_name(mut self, table: impl Into<String>) -> Self {
        self.table_name = table.into();
        self
    }

    /// Set the base origin for link normalization.
    pub fn with_base_origin(mut self, origin: impl Into<String>) -> Self {
        self.base_origin = origin.into();
        self
    }

    /// Set the fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

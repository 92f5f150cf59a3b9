//! Typed errors for the harvest pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that abort a scrape invocation.
///
/// Storage failures (ledger upload, per-record table insert) are
/// deliberately absent: they are non-fatal and surface through
/// [`crate::types::report::ScrapeReport`] instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Page fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Input URL could not be parsed
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Ledger file I/O failed
    #[error("ledger I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors from the single HTTP GET against the source page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The source answered with something other than 200
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// DNS, connection, or timeout failure from the transport
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Error from a storage backend (object storage or key-value table).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Object upload failed
    #[error("upload failed: {0}")]
    Upload(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Table insert failed
    #[error("insert failed: {0}")]
    Insert(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Failure injected by a test double
    #[error("{0}")]
    Injected(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

//! Job-Listing Scrape Pipeline
//!
//! A single-shot pipeline that fetches a job-listing page, extracts one
//! record per job card, appends the records to a local CSV ledger,
//! uploads the ledger snapshot to object storage, and indexes every
//! record into a key-value table under a freshly generated id.
//!
//! Stages run strictly in sequence; one invocation, no internal
//! concurrency. Only the fetch (and local file I/O) can abort a run —
//! storage failures are recorded per record in the returned
//! [`ScrapeReport`] and never stop processing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use harvest::{run_scrape, MemoryArtifactStore, MemoryJobTable, PageFetcher, ScrapeConfig};
//!
//! let config = ScrapeConfig::default();
//! let fetcher = PageFetcher::new(&config)?;
//! let archive = MemoryArtifactStore::new();
//! let table = MemoryJobTable::new();
//!
//! let report = run_scrape(
//!     "https://climatejobs.shortlist.net/jobs",
//!     &config,
//!     &fetcher,
//!     &archive,
//!     &table,
//! )
//! .await?;
//! assert!(report.fully_succeeded());
//! ```
//!
//! # Modules
//!
//! - [`fetcher`] - single GET with fixed identification and bounded timeout
//! - [`extractor`] - job-card field extraction with CSS selectors
//! - [`ledger`] - append-only CSV artifact
//! - [`traits`] - storage seams ([`ArtifactStore`], [`JobTable`])
//! - [`stores`] - backends (memory always; S3/DynamoDB behind the `aws` feature)
//! - [`pipeline`] - the invocation driver
//! - [`testing`] - canned fetcher for tests

pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod ledger;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{FetchError, HarvestError, Result, StoreError};
pub use extractor::JobExtractor;
pub use fetcher::{Fetch, PageFetcher};
pub use pipeline::run_scrape;
pub use stores::{MemoryArtifactStore, MemoryJobTable};
pub use traits::{ArtifactStore, JobTable};
pub use types::{
    config::ScrapeConfig,
    job::{JobItem, JobRecord, NOT_AVAILABLE},
    report::{ArchiveOutcome, RecordOutcome, ScrapeReport},
};

#[cfg(feature = "aws")]
pub use stores::{DynamoJobTable, S3ArtifactStore};

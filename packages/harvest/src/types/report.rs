//! Per-invocation accounting.
//!
//! The HTTP response body stays fixed for compatibility, so partial
//! failures are surfaced here instead of being visible only in logs.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of the upload-and-clean stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum ArchiveOutcome {
    Uploaded,
    Failed(String),
}

impl ArchiveOutcome {
    pub fn is_uploaded(&self) -> bool {
        matches!(self, Self::Uploaded)
    }
}

/// Indexing result for one record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordOutcome {
    /// Freshly generated id the record was inserted under.
    pub job_id: String,

    /// Serialized title ("N/A" when the card had none), for log correlation.
    pub job_title: String,

    /// Whether the table insert succeeded.
    pub indexed: bool,

    /// Failure reason when `indexed` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What one invocation actually did.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    /// The page that was scraped.
    pub source_url: String,

    /// Job cards matched on the page.
    pub jobs_found: usize,

    /// Rows appended to the local ledger.
    pub rows_appended: usize,

    /// Upload outcome for the ledger snapshot.
    pub archive: ArchiveOutcome,

    /// Per-record indexing outcomes, in document order.
    pub records: Vec<RecordOutcome>,

    /// When the invocation finished.
    pub finished_at: DateTime<Utc>,
}

impl ScrapeReport {
    /// Number of records successfully indexed.
    pub fn indexed_count(&self) -> usize {
        self.records.iter().filter(|r| r.indexed).count()
    }

    /// True only when the upload and every insert succeeded.
    pub fn fully_succeeded(&self) -> bool {
        self.archive.is_uploaded() && self.records.iter().all(|r| r.indexed)
    }
}

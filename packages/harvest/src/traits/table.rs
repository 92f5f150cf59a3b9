//! Key-value table seam for indexed records.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::job::JobItem;

/// Table holding one item per scraped record.
#[async_trait]
pub trait JobTable: Send + Sync {
    /// Insert `item` into `table`, keyed by `item.job_id`.
    ///
    /// Insertions are independent: callers treat a failure here as
    /// non-fatal and move on to the next record. No transaction, no
    /// rollback.
    async fn put_job(&self, table: &str, item: &JobItem) -> StoreResult<()>;

    /// Backend name for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}

//! Object-storage seam for the ledger snapshot.

use async_trait::async_trait;

use crate::error::StoreResult;

/// Destination for the uploaded ledger.
///
/// A put at an existing key replaces the object; the destination never
/// accumulates per-invocation history. Implementations are constructed
/// and injected by the caller rather than held as process-wide globals,
/// so tests can substitute fakes.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Upload `body` to `key` inside `bucket`, replacing any prior object.
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> StoreResult<()>;

    /// Backend name for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}

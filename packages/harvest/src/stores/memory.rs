//! In-memory storage implementations for testing and development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::traits::{ArtifactStore, JobTable};
use crate::types::job::JobItem;

/// In-memory object store. Data is lost on drop; testing and
/// development only.
#[derive(Default)]
pub struct MemoryArtifactStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
    fail_uploads: RwLock<bool>,
}

impl MemoryArtifactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent upload fail, for failure-path tests.
    pub fn set_fail_uploads(&self, fail: bool) {
        *self.fail_uploads.write().unwrap() = fail;
    }

    /// Fetch a stored object.
    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .unwrap()
            .get(&object_id(bucket, key))
            .cloned()
    }

    /// Number of stored objects.
    pub fn object_count(&self) -> usize {
        self.objects.read().unwrap().len()
    }
}

fn object_id(bucket: &str, key: &str) -> String {
    format!("{}/{}", bucket, key)
}

#[async_trait]
impl ArtifactStore for MemoryArtifactStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> StoreResult<()> {
        if *self.fail_uploads.read().unwrap() {
            return Err(StoreError::Injected("simulated upload failure".to_string()));
        }
        self.objects
            .write()
            .unwrap()
            .insert(object_id(bucket, key), body);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// In-memory job table.
#[derive(Default)]
pub struct MemoryJobTable {
    tables: RwLock<HashMap<String, Vec<JobItem>>>,
    fail_titles: RwLock<Vec<String>>,
}

impl MemoryJobTable {
    /// Create a new empty table store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail inserts whose `job_title` matches, for partial-failure tests.
    pub fn fail_title(&self, title: impl Into<String>) {
        self.fail_titles.write().unwrap().push(title.into());
    }

    /// Items inserted into `table`, in insertion order.
    pub fn items_in(&self, table: &str) -> Vec<JobItem> {
        self.tables
            .read()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of inserted items across tables.
    pub fn item_count(&self) -> usize {
        self.tables.read().unwrap().values().map(Vec::len).sum()
    }
}

#[async_trait]
impl JobTable for MemoryJobTable {
    async fn put_job(&self, table: &str, item: &JobItem) -> StoreResult<()> {
        if self
            .fail_titles
            .read()
            .unwrap()
            .iter()
            .any(|t| t == &item.job_title)
        {
            return Err(StoreError::Injected(format!(
                "simulated insert failure for {}",
                item.job_title
            )));
        }
        self.tables
            .write()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(item.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

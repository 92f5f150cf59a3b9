//! S3-backed artifact store.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::ArtifactStore;

/// Artifact store backed by an S3 (or S3-compatible) bucket.
///
/// The client is constructed by the caller and injected; there is no
/// process-global handle.
pub struct S3ArtifactStore {
    client: aws_sdk_s3::Client,
}

impl S3ArtifactStore {
    /// Wrap an already-configured client.
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient AWS environment (region,
    /// credentials chain).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_s3::Client::new(&config))
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> StoreResult<()> {
        debug!(bucket, key, bytes = body.len(), "uploading ledger snapshot");
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StoreError::Upload(Box::new(e)))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "s3"
    }
}

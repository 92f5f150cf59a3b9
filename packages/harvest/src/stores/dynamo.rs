//! DynamoDB-backed job table.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::JobTable;
use crate::types::job::JobItem;

/// Job table backed by DynamoDB. One item per record, keyed by the
/// generated `job_id`.
pub struct DynamoJobTable {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoJobTable {
    /// Wrap an already-configured client.
    pub fn new(client: aws_sdk_dynamodb::Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient AWS environment.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_dynamodb::Client::new(&config))
    }
}

#[async_trait]
impl JobTable for DynamoJobTable {
    async fn put_job(&self, table: &str, item: &JobItem) -> StoreResult<()> {
        debug!(table, job_id = %item.job_id, "inserting job item");
        self.client
            .put_item()
            .table_name(table)
            .item("job_id", AttributeValue::S(item.job_id.clone()))
            .item("job_title", AttributeValue::S(item.job_title.clone()))
            .item("company_name", AttributeValue::S(item.company_name.clone()))
            .item("location", AttributeValue::S(item.location.clone()))
            .item("date_posted", AttributeValue::S(item.date_posted.clone()))
            .item("job_link", AttributeValue::S(item.job_link.clone()))
            .send()
            .await
            .map_err(|e| StoreError::Insert(Box::new(e)))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "dynamodb"
    }
}

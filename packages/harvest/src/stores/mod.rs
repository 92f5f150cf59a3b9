//! Storage implementations.
//!
//! Available backends:
//! - `MemoryArtifactStore` / `MemoryJobTable` - in-memory (always available)
//! - `S3ArtifactStore` - S3 object storage (requires `aws` feature)
//! - `DynamoJobTable` - DynamoDB table (requires `aws` feature)

pub mod memory;

#[cfg(feature = "aws")]
pub mod dynamo;

#[cfg(feature = "aws")]
pub mod s3;

pub use memory::{MemoryArtifactStore, MemoryJobTable};

#[cfg(feature = "aws")]
pub use dynamo::DynamoJobTable;

#[cfg(feature = "aws")]
pub use s3::S3ArtifactStore;

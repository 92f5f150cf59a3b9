//! Data types for the scrape pipeline.

pub mod config;
pub mod job;
pub mod report;

pub use config::ScrapeConfig;
pub use job::{JobItem, JobRecord, NOT_AVAILABLE};
pub use report::{ArchiveOutcome, RecordOutcome, ScrapeReport};

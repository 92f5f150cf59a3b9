//! The invocation driver: fetch → extract → ledger → archive → index.
//!
//! Fully sequential; each stage runs to completion before the next.
//! Only the fetch and local file I/O can abort the run. Upload and
//! per-record insert failures are logged and recorded in the returned
//! report, preserving the non-aborting behavior while making partial
//! failure observable to the caller.

use tracing::{info, warn};
use url::Url;
use uuid::Uuid;

use crate::error::{HarvestError, Result};
use crate::extractor::JobExtractor;
use crate::fetcher::Fetch;
use crate::ledger;
use crate::traits::{ArtifactStore, JobTable};
use crate::types::config::ScrapeConfig;
use crate::types::job::JobItem;
use crate::types::report::{ArchiveOutcome, RecordOutcome, ScrapeReport};

/// Run one scrape invocation against `url`.
pub async fn run_scrape<F, A, T>(
    url: &str,
    config: &ScrapeConfig,
    fetcher: &F,
    archive: &A,
    table: &T,
) -> Result<ScrapeReport>
where
    F: Fetch + ?Sized,
    A: ArtifactStore + ?Sized,
    T: JobTable + ?Sized,
{
    Url::parse(url).map_err(|_| HarvestError::InvalidUrl {
        url: url.to_string(),
    })?;

    info!(url, "scrape starting");
    let html = fetcher.fetch(url).await?;

    // Parser state stays inside this block; only the records cross the
    // awaits below.
    let records = {
        let extractor = JobExtractor::new(&config.base_origin);
        extractor.extract(&html)
    };
    info!(url, jobs_found = records.len(), "extraction complete");

    let rows_appended = ledger::append_records(&config.ledger_path, &records)?;

    let archive_outcome = upload_and_clean(config, archive).await?;

    let mut outcomes = Vec::with_capacity(records.len());
    for record in &records {
        let item = JobItem::from_record(Uuid::new_v4().to_string(), record);
        match table.put_job(&config.table_name, &item).await {
            Ok(()) => {
                info!(job_id = %item.job_id, job_title = %item.job_title, "job indexed");
                outcomes.push(RecordOutcome {
                    job_id: item.job_id,
                    job_title: item.job_title,
                    indexed: true,
                    error: None,
                });
            }
            Err(e) => {
                warn!(
                    job_id = %item.job_id,
                    job_title = %item.job_title,
                    error = %e,
                    "job insert failed, continuing with next record"
                );
                outcomes.push(RecordOutcome {
                    job_id: item.job_id,
                    job_title: item.job_title,
                    indexed: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let report = ScrapeReport {
        source_url: url.to_string(),
        jobs_found: records.len(),
        rows_appended,
        archive: archive_outcome,
        records: outcomes,
        finished_at: chrono::Utc::now(),
    };
    info!(
        url,
        jobs_found = report.jobs_found,
        indexed = report.indexed_count(),
        uploaded = report.archive.is_uploaded(),
        "scrape finished"
    );
    Ok(report)
}

/// Upload the ledger file, then remove it whether or not the upload
/// succeeded. Only the removal itself can abort.
async fn upload_and_clean<A>(config: &ScrapeConfig, archive: &A) -> Result<ArchiveOutcome>
where
    A: ArtifactStore + ?Sized,
{
    let body = tokio::fs::read(&config.ledger_path).await?;

    let outcome = match archive
        .put_object(&config.bucket, &config.object_key, body)
        .await
    {
        Ok(()) => {
            info!(
                bucket = %config.bucket,
                key = %config.object_key,
                store = archive.name(),
                "ledger snapshot uploaded"
            );
            ArchiveOutcome::Uploaded
        }
        Err(e) => {
            warn!(
                bucket = %config.bucket,
                key = %config.object_key,
                error = %e,
                "ledger upload failed, continuing"
            );
            ArchiveOutcome::Failed(e.to_string())
        }
    };

    tokio::fs::remove_file(&config.ledger_path).await?;
    Ok(outcome)
}

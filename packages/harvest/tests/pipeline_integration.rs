//! Integration tests for the full scrape pipeline, driven with the
//! canned fetcher and in-memory storage backends.

use harvest::testing::StaticFetcher;
use harvest::{
    run_scrape, ArchiveOutcome, FetchError, HarvestError, MemoryArtifactStore, MemoryJobTable,
    ScrapeConfig,
};

const JOBS_URL: &str = "https://example.com/jobs";

const ONE_CARD_PAGE: &str = r#"
<html><body>
  <div class="sc-beqWaB gupdsY job-card">
    <div itemprop="title">Engineer</div>
    <a data-testid="link">Acme</a>
    <div class="sc-beqWaB enQFes">2 days ago</div>
    <a data-testid="job-title-link" href="/job/42">View job</a>
  </div>
</body></html>"#;

const TWO_IDENTICAL_CARDS_PAGE: &str = r#"
<html><body>
  <div class="sc-beqWaB gupdsY job-card">
    <div itemprop="title">Engineer</div>
    <a data-testid="link">Acme</a>
  </div>
  <div class="sc-beqWaB gupdsY job-card">
    <div itemprop="title">Engineer</div>
    <a data-testid="link">Acme</a>
  </div>
</body></html>"#;

const NO_CARDS_PAGE: &str = "<html><body><p>No openings today.</p></body></html>";

fn test_config(dir: &tempfile::TempDir) -> ScrapeConfig {
    ScrapeConfig::default().with_ledger_path(dir.path().join("job_details.csv"))
}

fn uploaded_csv(archive: &MemoryArtifactStore, config: &ScrapeConfig) -> String {
    let bytes = archive
        .object(&config.bucket, &config.object_key)
        .expect("ledger snapshot should have been uploaded");
    String::from_utf8(bytes).unwrap()
}

#[tokio::test]
async fn test_end_to_end_single_card() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let fetcher = StaticFetcher::new().with_page(JOBS_URL, ONE_CARD_PAGE);
    let archive = MemoryArtifactStore::new();
    let table = MemoryJobTable::new();

    let report = run_scrape(JOBS_URL, &config, &fetcher, &archive, &table)
        .await
        .unwrap();

    assert_eq!(report.jobs_found, 1);
    assert_eq!(report.rows_appended, 1);
    assert!(report.fully_succeeded());

    // CSV artifact: header plus the one row, missing location as N/A,
    // relative link rewritten against the base origin.
    assert_eq!(
        uploaded_csv(&archive, &config),
        "Job Title,Company Name,Location,Date Posted,Job Link\n\
         Engineer,Acme,N/A,2 days ago,https://climatejobs.shortlist.net/job/42\n"
    );

    // Table item: five attributes plus the generated id.
    let items = table.items_in(&config.table_name);
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert!(!item.job_id.is_empty());
    assert_eq!(item.job_title, "Engineer");
    assert_eq!(item.company_name, "Acme");
    assert_eq!(item.location, "N/A");
    assert_eq!(item.date_posted, "2 days ago");
    assert_eq!(item.job_link, "https://climatejobs.shortlist.net/job/42");

    // Local ledger always removed once the upload was attempted.
    assert!(!config.ledger_path.exists());
}

#[tokio::test]
async fn test_non_200_fetch_aborts_before_any_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let fetcher = StaticFetcher::new().with_status(JOBS_URL, 503);
    let archive = MemoryArtifactStore::new();
    let table = MemoryJobTable::new();

    let err = run_scrape(JOBS_URL, &config, &fetcher, &archive, &table)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        HarvestError::Fetch(FetchError::Status { status: 503 })
    ));
    assert!(!config.ledger_path.exists());
    assert_eq!(archive.object_count(), 0);
    assert_eq!(table.item_count(), 0);
}

#[tokio::test]
async fn test_invalid_url_is_rejected_up_front() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let fetcher = StaticFetcher::new();
    let archive = MemoryArtifactStore::new();
    let table = MemoryJobTable::new();

    let err = run_scrape("not a url", &config, &fetcher, &archive, &table)
        .await
        .unwrap_err();
    assert!(matches!(err, HarvestError::InvalidUrl { .. }));
}

#[tokio::test]
async fn test_zero_cards_uploads_header_only_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let fetcher = StaticFetcher::new().with_page(JOBS_URL, NO_CARDS_PAGE);
    let archive = MemoryArtifactStore::new();
    let table = MemoryJobTable::new();

    let report = run_scrape(JOBS_URL, &config, &fetcher, &archive, &table)
        .await
        .unwrap();

    assert_eq!(report.jobs_found, 0);
    assert_eq!(report.rows_appended, 0);
    assert!(report.fully_succeeded());
    assert_eq!(
        uploaded_csv(&archive, &config),
        "Job Title,Company Name,Location,Date Posted,Job Link\n"
    );
    assert_eq!(table.item_count(), 0);
    assert!(!config.ledger_path.exists());
}

#[tokio::test]
async fn test_surviving_ledger_accumulates_without_duplicate_header() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    // A previous invocation left rows behind (ledger survived, e.g. no
    // cold start between scheduled runs).
    let leftover = harvest::JobRecord {
        title: Some("Analyst".to_string()),
        company: Some("Globex".to_string()),
        ..Default::default()
    };
    harvest::ledger::append_records(&config.ledger_path, &[leftover]).unwrap();

    let fetcher = StaticFetcher::new().with_page(JOBS_URL, ONE_CARD_PAGE);
    let archive = MemoryArtifactStore::new();
    let table = MemoryJobTable::new();

    run_scrape(JOBS_URL, &config, &fetcher, &archive, &table)
        .await
        .unwrap();

    let csv = uploaded_csv(&archive, &config);
    let header_count = csv
        .lines()
        .filter(|line| line.starts_with("Job Title"))
        .count();
    assert_eq!(header_count, 1);
    // Header, leftover row, new row.
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains("Analyst"));
    assert!(csv.contains("Engineer"));
}

#[tokio::test]
async fn test_identical_records_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let fetcher = StaticFetcher::new().with_page(JOBS_URL, TWO_IDENTICAL_CARDS_PAGE);
    let archive = MemoryArtifactStore::new();
    let table = MemoryJobTable::new();

    let report = run_scrape(JOBS_URL, &config, &fetcher, &archive, &table)
        .await
        .unwrap();

    assert_eq!(report.jobs_found, 2);
    let items = table.items_in(&config.table_name);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].job_title, items[1].job_title);
    assert_ne!(items[0].job_id, items[1].job_id);
}

#[tokio::test]
async fn test_upload_failure_is_non_fatal_and_cleanup_still_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let fetcher = StaticFetcher::new().with_page(JOBS_URL, ONE_CARD_PAGE);
    let archive = MemoryArtifactStore::new();
    archive.set_fail_uploads(true);
    let table = MemoryJobTable::new();

    let report = run_scrape(JOBS_URL, &config, &fetcher, &archive, &table)
        .await
        .unwrap();

    assert!(matches!(report.archive, ArchiveOutcome::Failed(_)));
    assert!(!report.fully_succeeded());
    // Indexing still ran and the local ledger was still removed.
    assert_eq!(table.item_count(), 1);
    assert!(!config.ledger_path.exists());
}

#[tokio::test]
async fn test_insert_failure_is_per_record_and_processing_continues() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    let page = r#"
    <html><body>
      <div class="sc-beqWaB gupdsY job-card"><div itemprop="title">Engineer</div></div>
      <div class="sc-beqWaB gupdsY job-card"><div itemprop="title">Analyst</div></div>
    </body></html>"#;
    let fetcher = StaticFetcher::new().with_page(JOBS_URL, page);
    let archive = MemoryArtifactStore::new();
    let table = MemoryJobTable::new();
    table.fail_title("Engineer");

    let report = run_scrape(JOBS_URL, &config, &fetcher, &archive, &table)
        .await
        .unwrap();

    assert_eq!(report.jobs_found, 2);
    assert_eq!(report.indexed_count(), 1);
    assert!(!report.fully_succeeded());

    let engineer = report
        .records
        .iter()
        .find(|r| r.job_title == "Engineer")
        .unwrap();
    assert!(!engineer.indexed);
    assert!(engineer.error.is_some());

    let analyst = report
        .records
        .iter()
        .find(|r| r.job_title == "Analyst")
        .unwrap();
    assert!(analyst.indexed);

    assert_eq!(table.item_count(), 1);
}

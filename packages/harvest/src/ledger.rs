//! Append-only CSV ledger.
//!
//! The ledger accumulates rows across invocations until it is cleared
//! out-of-band (or lost to a cold start); it is never truncated here.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::types::job::JobRecord;

/// Header row, written only when the file starts out empty.
pub const CSV_HEADER: [&str; 5] = [
    "Job Title",
    "Company Name",
    "Location",
    "Date Posted",
    "Job Link",
];

/// Append one row per record to the ledger at `path`, creating the file
/// if needed. Returns the number of rows appended (header excluded).
pub fn append_records(path: &Path, records: &[JobRecord]) -> Result<usize> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        writer.write_record(CSV_HEADER)?;
    }
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;

    debug!(
        path = %path.display(),
        rows = records.len(),
        wrote_header = needs_header,
        "ledger appended"
    );
    Ok(records.len())
}

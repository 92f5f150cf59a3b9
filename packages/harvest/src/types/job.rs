//! The job record and its serialized forms.

use serde::{Deserialize, Serialize};

/// Placeholder written to serialized outputs when a field was not found.
pub const NOT_AVAILABLE: &str = "N/A";

/// One job listing pulled from a job card.
///
/// Missing fields stay `None` in memory; the `"N/A"` placeholder only
/// appears in the CSV row and the table item, where the output format
/// requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// Free-form text as shown on the page ("2 days ago"), never parsed.
    pub date_posted: Option<String>,
    /// Absolute URL; relative hrefs are rewritten against the base origin
    /// during extraction.
    pub link: Option<String>,
}

impl JobRecord {
    /// CSV row in the fixed column order: title, company, location,
    /// date posted, link.
    pub fn to_row(&self) -> [&str; 5] {
        [
            or_na(&self.title),
            or_na(&self.company),
            or_na(&self.location),
            or_na(&self.date_posted),
            or_na(&self.link),
        ]
    }
}

fn or_na(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_AVAILABLE)
}

/// Item inserted into the key-value table, one per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobItem {
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub date_posted: String,
    pub job_link: String,
}

impl JobItem {
    /// Build the table item for a record under a freshly generated id.
    ///
    /// Ids are never derived from content, so logically identical records
    /// always land under distinct keys.
    pub fn from_record(job_id: impl Into<String>, record: &JobRecord) -> Self {
        Self {
            job_id: job_id.into(),
            job_title: or_na(&record.title).to_string(),
            company_name: or_na(&record.company).to_string(),
            location: or_na(&record.location).to_string(),
            date_posted: or_na(&record.date_posted).to_string(),
            job_link: or_na(&record.link).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> JobRecord {
        JobRecord {
            title: Some("Engineer".to_string()),
            company: Some("Acme".to_string()),
            location: None,
            date_posted: Some("2 days ago".to_string()),
            link: Some("https://climatejobs.shortlist.net/job/42".to_string()),
        }
    }

    #[test]
    fn test_row_substitutes_sentinel_for_missing_fields() {
        assert_eq!(
            record().to_row(),
            [
                "Engineer",
                "Acme",
                "N/A",
                "2 days ago",
                "https://climatejobs.shortlist.net/job/42",
            ]
        );
    }

    #[test]
    fn test_empty_record_is_all_sentinel() {
        assert_eq!(JobRecord::default().to_row(), ["N/A"; 5]);
    }

    #[test]
    fn test_item_carries_all_attributes() {
        let item = JobItem::from_record("id-1", &record());
        assert_eq!(item.job_id, "id-1");
        assert_eq!(item.job_title, "Engineer");
        assert_eq!(item.company_name, "Acme");
        assert_eq!(item.location, "N/A");
        assert_eq!(item.date_posted, "2 days ago");
        assert_eq!(item.job_link, "https://climatejobs.shortlist.net/job/42");
    }
}

//! Job-card field extraction.
//!
//! Locates job cards by their fixed tag/class signature and pulls five
//! sub-fields per card with independent lookups. A lookup that finds
//! nothing leaves the field `None`; nothing fails the whole record.
//! Values are stored as literal extracted text, no validation.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::types::job::JobRecord;

/// Extracts [`JobRecord`]s from job-listing HTML.
pub struct JobExtractor {
    base_origin: String,
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    date_posted: Selector,
    link: Selector,
}

impl JobExtractor {
    /// Create an extractor that rewrites relative links against
    /// `base_origin`.
    pub fn new(base_origin: impl Into<String>) -> Self {
        // Selectors match the source site's card markup; all are fixed
        // literals, so parsing cannot fail.
        Self {
            base_origin: base_origin.into(),
            card: Selector::parse("div.sc-beqWaB.gupdsY.job-card").unwrap(),
            title: Selector::parse(r#"div[itemprop="title"]"#).unwrap(),
            company: Selector::parse(r#"a[data-testid="link"]"#).unwrap(),
            location: Selector::parse(r#"meta[itemprop="address"]"#).unwrap(),
            date_posted: Selector::parse("div.sc-beqWaB.enQFes").unwrap(),
            link: Selector::parse(r#"a[data-testid="job-title-link"][href]"#).unwrap(),
        }
    }

    /// Extract one record per job card, in document order.
    ///
    /// The document is re-parsed on every call; there is no cached state
    /// to restart from.
    pub fn extract(&self, html: &str) -> Vec<JobRecord> {
        let document = Html::parse_document(html);
        let records: Vec<JobRecord> = document
            .select(&self.card)
            .map(|card| self.extract_card(card))
            .collect();
        debug!(cards = records.len(), "job cards extracted");
        records
    }

    fn extract_card(&self, card: ElementRef<'_>) -> JobRecord {
        JobRecord {
            title: text_of(card, &self.title),
            company: text_of(card, &self.company),
            location: attr_of(card, &self.location, "content"),
            date_posted: text_of(card, &self.date_posted),
            link: attr_of(card, &self.link, "href").map(|href| self.normalize_link(&href)),
        }
    }

    /// Prefix the base origin onto links that are not already absolute.
    fn normalize_link(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}{}", self.base_origin, href)
        }
    }
}

fn text_of(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

fn attr_of(card: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|value| value.trim().to_string())
}

//! Request handlers for the scrape service.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use harvest::{run_scrape, HarvestError, ScrapeReport};

use crate::app::AppState;

/// Fixed success body, kept verbatim for compatibility with existing
/// callers. Partial failures never change it; they show up in the
/// `report` field instead.
pub const SUCCESS_BODY: &str =
    "Job details have been scraped, saved in CSV, uploaded to S3, and stored in DynamoDB!";

/// Invocation payload. `html` holds the source URL, either directly or
/// wrapped in a single-element list (some schedulers pass arguments as
/// arrays).
#[derive(Debug, Deserialize)]
pub struct ScrapePayload {
    pub html: UrlField,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UrlField {
    One(String),
    Many(Vec<String>),
}

impl UrlField {
    /// Normalize to a single URL (first element if a list).
    pub fn into_url(self) -> Option<String> {
        match self {
            UrlField::One(url) => Some(url),
            UrlField::Many(urls) => urls.into_iter().next(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    pub report: ScrapeReport,
}

/// Aborting pipeline errors mapped onto HTTP statuses.
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<HarvestError> for AppError {
    fn from(err: HarvestError) -> Self {
        let status = match &err {
            HarvestError::Fetch(_) => StatusCode::BAD_GATEWAY,
            HarvestError::InvalidUrl { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            HarvestError::Io(_) | HarvestError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(error = %err, "scrape invocation aborted");
        Self {
            status,
            message: err.to_string(),
        }
    }
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Single-shot scrape invocation.
pub async fn scrape_handler(
    State(state): State<AppState>,
    Json(payload): Json<ScrapePayload>,
) -> Result<Json<ScrapeResponse>, AppError> {
    let url = payload
        .html
        .into_url()
        .ok_or_else(|| AppError::unprocessable("payload field `html` is empty"))?;

    let report = run_scrape(
        &url,
        &state.scrape,
        state.fetcher.as_ref(),
        state.archive.as_ref(),
        state.table.as_ref(),
    )
    .await?;

    Ok(Json(ScrapeResponse {
        status_code: 200,
        body: SUCCESS_BODY.to_string(),
        report,
    }))
}

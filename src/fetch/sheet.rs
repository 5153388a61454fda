use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Base of the published-spreadsheet CSV export endpoint.
const EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// Build the CSV export URL for one sub-sheet of a published spreadsheet.
pub fn export_url(sheet_id: &str, gid: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{EXPORT_BASE}/{sheet_id}/export"))?;
    url.query_pairs_mut()
        .append_pair("format", "csv")
        .append_pair("gid", gid);
    Ok(url)
}

#[derive(Debug, Error)]
pub enum SheetFetchError {
    /// The export endpoint answered, but not with a success status.
    #[error("sheet export returned status {0}")]
    Status(u16),
    /// Network or body-decode fault before a usable response existed.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

/// Where raw sheet CSV comes from. The production source is HTTP; tests
/// substitute a fixed in-memory document.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_csv(&self, sheet_id: &str, gid: &str) -> Result<String, SheetFetchError>;
}

/// Live source: one GET against the export URL per request. No retry, no
/// cache, no timeout; a hanging upstream holds the request open.
pub struct HttpSheetSource {
    client: Client,
}

impl HttpSheetSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch_csv(&self, sheet_id: &str, gid: &str) -> Result<String, SheetFetchError> {
        let url = export_url(sheet_id, gid).context("building sheet export URL")?;
        debug!(%url, "fetching sheet CSV");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SheetFetchError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .with_context(|| format!("reading CSV body from {url}"))?;
        debug!(bytes = body.len(), "sheet CSV fetched");
        Ok(body)
    }
}

//! Consumer-side wrapper for the events endpoint.
//!
//! Mirrors the page's fetch flow: build the query URL, GET, and collapse
//! every failure shape into a single error value so the caller renders one
//! error state instead of crashing.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{debug, error};
use url::Url;

use crate::schedule::Record;

#[derive(Debug, Deserialize)]
struct EventsEnvelope {
    #[serde(default)]
    data: Option<Vec<Record>>,
    #[serde(default)]
    error: Option<String>,
}

pub struct EventsClient {
    http: reqwest::Client,
    base: Url,
}

impl EventsClient {
    pub fn new(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    /// Fetch the schedule, invoking `on_data` exactly once with the records
    /// on success.
    ///
    /// A non-success status, or an `error` field in an otherwise successful
    /// body, both surface as a plain `Err`; nothing is retried.
    pub async fn fetch_events<F>(
        &self,
        sheet_id: &str,
        gid: &str,
        header_row: usize,
        on_data: Option<F>,
    ) -> Result<Vec<Record>>
    where
        F: FnOnce(&[Record]),
    {
        let mut url = self.base.join("/api/events")?;
        url.query_pairs_mut()
            .append_pair("sheetId", sheet_id)
            .append_pair("gid", gid)
            .append_pair("headerRow", &header_row.to_string());
        debug!(%url, "fetching events");

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;

        let status = resp.status();
        if !status.is_success() {
            error!(%status, "events fetch failed");
            return Err(anyhow!("failed to fetch events: {}", status.as_u16()));
        }

        let envelope: EventsEnvelope = resp
            .json()
            .await
            .context("reading events response body")?;

        if let Some(message) = envelope.error {
            error!(error = %message, "events endpoint reported an error");
            return Err(anyhow!("{message}"));
        }

        let data = envelope.data.unwrap_or_default();
        debug!(count = data.len(), "events fetched");

        if let Some(on_data) = on_data {
            on_data(&data);
        }
        Ok(data)
    }
}

//! HTTP client for the upstream directory.

use crate::config::SourceConfig;
use crate::error::{SourceError, SourceResult};
use crate::normalize::normalize_practitioner;
use crate::wire::UpstreamPractitioner;
use chrono::{DateTime, Utc};
use healnet_core::Practitioner;

/// A fetched snapshot of the directory.
///
/// Constructed once per fetch and read-only afterwards; the records live
/// for the rest of the session.
#[derive(Clone, Debug)]
pub struct Directory {
    pub practitioners: Vec<Practitioner>,
    pub retrieved_at: DateTime<Utc>,
}

/// Client for the remote practitioner directory.
pub struct SourceClient {
    http: reqwest::Client,
    config: SourceConfig,
}

impl SourceClient {
    pub fn new(config: SourceConfig) -> SourceResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(SourceError::ClientBuild)?;

        Ok(Self { http, config })
    }

    /// Fetch and normalize the full practitioner collection.
    ///
    /// The upstream document must be a JSON array; entries that fail to
    /// deserialize are logged and skipped rather than failing the whole
    /// fetch.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the request cannot be sent, the server
    /// answers with a non-success status, the body is not valid JSON, or
    /// the document is not an array.
    pub async fn fetch_directory(&self) -> SourceResult<Directory> {
        tracing::info!(url = %self.config.source_url(), "fetching practitioner directory");

        let response = self
            .http
            .get(self.config.source_url())
            .send()
            .await
            .map_err(SourceError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let document: serde_json::Value = response.json().await.map_err(SourceError::Decode)?;
        let entries = document.as_array().ok_or(SourceError::InvalidFormat)?;

        let mut practitioners = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<UpstreamPractitioner>(entry.clone()) {
                Ok(wire) => practitioners.push(normalize_practitioner(wire)),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed directory entry");
                }
            }
        }

        tracing::info!(count = practitioners.len(), "directory fetched");

        Ok(Directory {
            practitioners,
            retrieved_at: Utc::now(),
        })
    }
}

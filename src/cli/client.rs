use reqwest::StatusCode;
use thiserror::Error;

use crate::filter::TelemetryQuery;
use crate::fleet::Reading;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Thin HTTP client for a running telemetry server.
pub struct TelemetryClient {
    base_url: String,
    http: reqwest::Client,
}

impl TelemetryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: reqwest::Client::new() }
    }

    pub fn telemetry_url(&self) -> String {
        format!("{}/api/telemetry", self.base_url)
    }

    pub async fn query(&self, query: &TelemetryQuery) -> Result<Vec<Reading>, ClientError> {
        let url = self.telemetry_url();
        tracing::debug!(%url, ?query, "fetching telemetry");

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ClientError::Transport { url: url.clone(), source })?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, message });
        }

        res.json::<Vec<Reading>>().await.map_err(ClientError::Decode)
    }
}

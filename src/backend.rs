//! Downstream sheet-data API client.
//!
//! The private API serves one sheet per (office, metric) pair at
//! `<base_url>/<office>/<metric>`. Both segments are matched lowercase on
//! the backend side, so they are case-folded here before the URL is built.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::BackendConfig;
use crate::logging::SYNC_TRACE_TARGET;

/// Sheet tab queried on every sync. The form exporter writes all responses
/// into this single tab.
pub const SHEET_QUERY_NAME: &str = "Form responses 1";

/// Fixed request body sent to the private API.
#[derive(Serialize)]
struct SheetQuery {
    name: &'static str,
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend base URL `{0}`: {1}")]
    BaseUrl(String, String),

    #[error("backend request failed: {0}")]
    Request(String),

    #[error("backend returned a non-JSON body: {0}")]
    Decode(String),
}

/// Outcome of one sync call against the private API.
///
/// A downstream status outside the success range is a regular outcome, not
/// an error: the caller reports it to the frontend as `{success:false,
/// status}` while transport and decode failures take the error path.
#[derive(Debug)]
pub enum SyncOutcome {
    /// 2xx answer; parsed JSON passed through unmodified.
    Data(serde_json::Value),
    /// Non-2xx answer with the downstream status code.
    UpstreamStatus(u16),
}

/// HTTP client for the private sheet-data API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: reqwest::Url,
    client: reqwest::Client,
}

impl BackendClient {
    /// Build a client for the configured base URL.
    ///
    /// The base URL is parsed and checked once here so that per-request URL
    /// construction cannot fail.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = reqwest::Url::parse(&config.base_url)
            .map_err(|e| BackendError::BaseUrl(config.base_url.clone(), e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::BaseUrl(
                config.base_url.clone(),
                "URL cannot carry path segments".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(format!("syncgate/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// Target URL for one (office, metric) pair: both fields lowercased and
    /// appended as percent-encoded path segments.
    pub fn target_url(&self, office: &str, metric: &str) -> reqwest::Url {
        let mut url = self.base_url.clone();
        {
            // Cannot fail: cannot_be_a_base was rejected in new().
            let mut segments = url
                .path_segments_mut()
                .expect("base URL validated in new()");
            segments.push(&office.to_lowercase());
            segments.push(&metric.to_lowercase());
        }
        url
    }

    /// POST the fixed sheet query to `<base_url>/<office>/<metric>`.
    pub async fn sync(&self, office: &str, metric: &str) -> Result<SyncOutcome, BackendError> {
        let url = self.target_url(office, metric);
        info!(target: SYNC_TRACE_TARGET, %url, "fetching from backend");

        let response = self
            .client
            .post(url)
            .json(&SheetQuery {
                name: SHEET_QUERY_NAME,
            })
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(SyncOutcome::UpstreamStatus(status.as_u16()));
        }

        let data = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        Ok(SyncOutcome::Data(data))
    }
}

//! Podwise Client
//!
//! Calls the Podwise podcast search endpoint and decodes the body into a
//! typed schema. Anything that does not match the schema is reported as
//! [`SearchError::ParseError`] instead of leaking an unchecked shape inward.
//!
//! One request per search: no retries and no timeout beyond reqwest's
//! defaults.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::PodcastSearch;
use crate::config::UpstreamConfig;
use crate::models::PodcastResult;

/// Default upstream search endpoint
pub const PODWISE_SEARCH_URL: &str = "https://podwise.ai/api/search/podcasts";

/// Fixed page size; only the first page is ever requested
pub const HITS_PER_PAGE: u32 = 20;

/// Errors that can occur while talking to Podwise
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Podwise returned status {0}")]
    Status(u16),

    #[error("Failed to parse search results: {0}")]
    ParseError(String),
}

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    page: u32,
    #[serde(rename = "hitsPerPage")]
    hits_per_page: u32,
}

/// Upstream body. `result` may be missing or null when nothing matched.
#[derive(Debug, Deserialize)]
struct PodwiseResponse {
    #[serde(default)]
    result: Option<Vec<PodcastResult>>,
}

/// HTTP client for the Podwise search API
pub struct PodwiseClient {
    client: Client,
    search_url: String,
}

impl PodwiseClient {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), search_url)
    }

    pub fn with_client(client: Client, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(config.search_url.clone())
    }
}

#[async_trait]
impl PodcastSearch for PodwiseClient {
    async fn search(&self, query: &str) -> Result<Vec<PodcastResult>, SearchError> {
        info!(query = %query, "Searching Podwise");

        let params = SearchParams {
            q: query,
            page: 0,
            hits_per_page: HITS_PER_PAGE,
        };

        let response = self
            .client
            .get(&self.search_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Podwise returned an error status");
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let parsed: PodwiseResponse = serde_json::from_slice(&body)
            .map_err(|e| SearchError::ParseError(e.to_string()))?;

        let results = parsed.result.unwrap_or_default();
        debug!(count = results.len(), "Podwise response decoded");

        Ok(results)
    }
}

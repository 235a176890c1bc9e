use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use crate::config::Config;
use crate::search::{PodcastSearch, PodwiseClient};
use crate::types::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub search: Arc<dyn PodcastSearch>,
}

impl AppState {
    /// Build state backed by the live Podwise API
    pub fn new(config: Config) -> Self {
        let search = Arc::new(PodwiseClient::from_config(&config.upstream));
        Self { config, search }
    }

    pub fn with_search(config: Config, search: Arc<dyn PodcastSearch>) -> Self {
        Self { config, search }
    }
}

/// A user-supplied search term. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: Option<String>) -> Result<Self, AppError> {
        match raw {
            Some(q) if !q.trim().is_empty() => Ok(Self(q)),
            _ => Err(AppError::MissingQuery),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A podcast as returned by the upstream search API.
///
/// Fields other than `name` and `seq` are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastResult {
    pub name: String,
    #[serde(deserialize_with = "deserialize_seq")]
    pub seq: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PodcastResult {
    pub fn new(name: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seq: seq.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Case-insensitive comparison against a search term
    pub fn is_exact_match(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }
}

// Accept `seq` as either a JSON string or a number
fn deserialize_seq<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seq {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Seq::deserialize(deserializer)? {
        Seq::Text(s) => s,
        Seq::Number(n) => n.to_string(),
    })
}

/// Successful body of `GET /api/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub result: Vec<PodcastResult>,
    #[serde(rename = "exactMatch")]
    pub exact_match: bool,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

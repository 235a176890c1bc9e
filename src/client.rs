//! Search Proxy Client
//!
//! Used by the terminal UI to call `GET /api/search` on a running server.
//! Only the body is inspected: a body carrying `error` is a failed search,
//! whatever the status code says.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::PodcastResult;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request to search proxy failed: {0}")]
    Transport(String),

    #[error("Invalid response from search proxy: {0}")]
    Decode(String),
}

/// Body returned by the search proxy
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProxyReply {
    Error {
        error: String,
    },
    Results {
        #[serde(default)]
        result: Vec<PodcastResult>,
        #[serde(default, rename = "exactMatch")]
        exact_match: bool,
    },
}

/// Anything the terminal UI can send a keyword to
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<ProxyReply, ClientError>;
}

pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/api/search", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchBackend for ProxyClient {
    async fn search(&self, keyword: &str) -> Result<ProxyReply, ClientError> {
        debug!(keyword = %keyword, "Querying search proxy");

        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", keyword)])
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn test_search_url() {
        assert_eq!(
            ProxyClient::new("http://localhost:3000/").search_url(),
            "http://localhost:3000/api/search"
        );
        assert_eq!(
            ProxyClient::new("http://localhost:3000").search_url(),
            "http://localhost:3000/api/search"
        );
    }

    #[test]
    fn test_reply_variants() {
        let reply: ProxyReply = serde_json::from_str(r#"{"error": "No results found"}"#).unwrap();
        assert_eq!(
            reply,
            ProxyReply::Error {
                error: "No results found".to_string()
            }
        );

        let reply: ProxyReply =
            serde_json::from_str(r#"{"result": [{"name": "A", "seq": "1"}], "exactMatch": true}"#)
                .unwrap();
        assert_eq!(
            reply,
            ProxyReply::Results {
                result: vec![PodcastResult::new("A", "1")],
                exact_match: true,
            }
        );

        let reply: ProxyReply = serde_json::from_str("{}").unwrap();
        assert_eq!(
            reply,
            ProxyReply::Results {
                result: vec![],
                exact_match: false,
            }
        );
    }

    #[tokio::test]
    async fn test_error_body_wins_over_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/search")
            .match_query(Matcher::UrlEncoded("q".into(), "xyz".into()))
            .with_status(404)
            .with_body(r#"{"error": "No results found"}"#)
            .create_async()
            .await;

        let reply = ProxyClient::new(server.url()).search("xyz").await.unwrap();
        assert_eq!(
            reply,
            ProxyReply::Error {
                error: "No results found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/search")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let err = ProxyClient::new(server.url()).search("x").await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}

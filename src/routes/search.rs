//! Podcast Search Route
//!
//! `GET /api/search?q=<name>` proxies the query to Podwise and narrows the
//! results to a single podcast when one matches the name exactly.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

use crate::models::{AppState, SearchQuery, SearchResults};
use crate::search::{select_results, MatchOutcome};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(search_podcasts))
        .with_state(state)
}

pub async fn search_podcasts(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<SearchResults>> {
    // A repeated `q` is not an error: the first one wins
    let raw = match params {
        Ok(Query(pairs)) => pairs.into_iter().find(|(key, _)| key == "q").map(|(_, value)| value),
        Err(rejection) => {
            warn!(error = %rejection, "Malformed search query string");
            None
        }
    };
    let query = SearchQuery::parse(raw)?;

    let results = state.search.search(query.as_str()).await?;

    match select_results(query.as_str(), results) {
        MatchOutcome::Empty => Err(AppError::NotFound),
        MatchOutcome::Exact(podcast) => {
            info!(query = %query.as_str(), seq = %podcast.seq, "Exact match found");
            Ok(Json(SearchResults {
                result: vec![podcast],
                exact_match: true,
            }))
        }
        MatchOutcome::Related(result) => {
            info!(query = %query.as_str(), count = result.len(), "No exact match, returning related results");
            Ok(Json(SearchResults {
                result,
                exact_match: false,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{ErrorResponse, PodcastResult};
    use crate::search::{PodcastSearch, SearchError};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Upstream stand-in that records every query it receives
    struct StubSearch {
        response: fn() -> Result<Vec<PodcastResult>, SearchError>,
        calls: AtomicUsize,
        queries: Mutex<Vec<String>>,
    }

    impl StubSearch {
        fn new(response: fn() -> Result<Vec<PodcastResult>, SearchError>) -> Arc<Self> {
            Arc::new(Self {
                response,
                calls: AtomicUsize::new(0),
                queries: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl PodcastSearch for StubSearch {
        async fn search(&self, query: &str) -> Result<Vec<PodcastResult>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.to_string());
            (self.response)()
        }
    }

    fn test_show_results() -> Result<Vec<PodcastResult>, SearchError> {
        Ok(vec![
            PodcastResult::new("Test Show", "123"),
            PodcastResult::new("Test Show Extended", "456"),
        ])
    }

    async fn send_get(stub: Arc<StubSearch>, uri: &str) -> (StatusCode, serde_json::Value) {
        let state = AppState::with_search(Config::default(), stub);
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_exact_match() {
        let stub = StubSearch::new(test_show_results);
        let (status, body) = send_get(stub.clone(), "/api/search?q=Test%20Show").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "result": [{"name": "Test Show", "seq": "123"}],
                "exactMatch": true
            })
        );
        assert_eq!(*stub.queries.lock().unwrap(), vec!["Test Show".to_string()]);
    }

    #[tokio::test]
    async fn test_exact_match_case_insensitive() {
        let stub = StubSearch::new(test_show_results);
        let (status, body) = send_get(stub, "/api/search?q=test+show+EXTENDED").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exactMatch"], true);
        assert_eq!(body["result"][0]["seq"], "456");
        assert_eq!(body["result"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_related_results() {
        let stub = StubSearch::new(test_show_results);
        let (status, body) = send_get(stub, "/api/search?q=Test").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: SearchResults = serde_json::from_value(body).unwrap();
        assert!(!parsed.exact_match);
        assert_eq!(parsed.result, test_show_results().unwrap());
    }

    #[tokio::test]
    async fn test_missing_query() {
        let stub = StubSearch::new(test_show_results);
        for uri in ["/api/search", "/api/search?q=", "/api/search?q=%20%20"] {
            let (status, body) = send_get(stub.clone(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Query parameter is required");
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repeated_query_uses_first() {
        let stub = StubSearch::new(test_show_results);
        let (status, body) = send_get(stub.clone(), "/api/search?q=Test%20Show&q=other").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exactMatch"], true);
        assert_eq!(body["result"][0]["seq"], "123");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*stub.queries.lock().unwrap(), vec!["Test Show".to_string()]);
    }

    #[tokio::test]
    async fn test_no_results() {
        let stub = StubSearch::new(|| Ok(vec![]));
        let (status, body) = send_get(stub.clone(), "/api/search?q=xyz").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let parsed: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.error, "No results found");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let stub = StubSearch::new(|| Err(SearchError::RequestFailed("connection reset".into())));
        let (status, body) = send_get(stub, "/api/search?q=anything").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Failed to fetch data"}));
    }

    #[tokio::test]
    async fn test_upstream_parse_failure() {
        let stub = StubSearch::new(|| Err(SearchError::ParseError("expected value".into())));
        let (status, body) = send_get(stub, "/api/search?q=anything").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch data");
    }
}

//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/search` - Podcast search proxy
//! - `/api/health` - Health checks
//! - `/` - Search page

pub mod health;
pub mod search;
pub mod ui;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::middleware::apply_cors;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let origins = state.config.server.cors_allowed_origins.clone();

    let router = Router::new()
        .merge(search::router(state))
        .merge(health::router())
        .merge(ui::router())
        .layer(TraceLayer::new_for_http());

    apply_cors(router, &origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use mockito::Matcher;
    use tower::ServiceExt;

    async fn app_with_upstream(server: &mockito::ServerGuard) -> Router {
        let mut config = Config::default();
        config.upstream.search_url = format!("{}/api/search/podcasts", server.url());
        create_router(AppState::new(config))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_search_through_podwise() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search/podcasts")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Test Show".into()),
                Matcher::UrlEncoded("page".into(), "0".into()),
                Matcher::UrlEncoded("hitsPerPage".into(), "20".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"result": [
                    {"name": "Test Show", "seq": "123"},
                    {"name": "Test Show Extended", "seq": "456"}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let app = app_with_upstream(&server).await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/search?q=Test%20Show")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "result": [{"name": "Test Show", "seq": "123"}],
                "exactMatch": true
            })
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_upstream_result() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/search/podcasts")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"result": []}"#)
            .create_async()
            .await;

        let response = app_with_upstream(&server)
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/search?q=xyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "No results found"})
        );
    }

    #[tokio::test]
    async fn test_empty_query_skips_upstream() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let response = app_with_upstream(&server)
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/search?q=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_json_upstream() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/search/podcasts")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let response = app_with_upstream(&server)
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/search?q=anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Failed to fetch data"})
        );
    }

    #[tokio::test]
    async fn test_health_and_index() {
        let app = create_router(AppState::new(Config::default()));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }
}

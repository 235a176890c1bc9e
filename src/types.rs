// Error types shared by the HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::models::ErrorResponse;
use crate::search::SearchError;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Query parameter is required")]
    MissingQuery,

    #[error("No results found")]
    NotFound,

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Failed to parse upstream response: {0}")]
    Parse(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingQuery => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to clients. Upstream details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingQuery => "Query parameter is required",
            AppError::NotFound => "No results found",
            AppError::Upstream(_) | AppError::Parse(_) => "Failed to fetch data",
        }
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::ParseError(msg) => AppError::Parse(msg),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream(_) | AppError::Parse(_) => error!(error = %self, "Search failed"),
            _ => warn!(error = %self, "Search rejected"),
        }

        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

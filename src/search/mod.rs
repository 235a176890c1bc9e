//! Search Module
//!
//! Podcast search against the Podwise API:
//! - `podwise` - HTTP client for the upstream search endpoint
//! - `matching` - exact-match selection over upstream results
//!
//! The upstream call sits behind the [`PodcastSearch`] trait so handlers can
//! run against a stub in tests.

pub mod matching;
pub mod podwise;

pub use matching::{select_results, MatchOutcome};
pub use podwise::{PodwiseClient, SearchError, HITS_PER_PAGE, PODWISE_SEARCH_URL};

use async_trait::async_trait;
use crate::models::PodcastResult;

/// A source of podcast search results
#[async_trait]
pub trait PodcastSearch: Send + Sync {
    /// Run one search. An empty vec means upstream found nothing.
    async fn search(&self, query: &str) -> Result<Vec<PodcastResult>, SearchError>;
}

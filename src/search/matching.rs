//! Exact-match selection
//!
//! A result is an exact match when its name equals the query ignoring case.
//! When several results qualify, the first in upstream order wins.

use crate::models::PodcastResult;

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Upstream returned nothing
    Empty,
    /// The first result whose name matches the query
    Exact(PodcastResult),
    /// No exact match; every result, in upstream order
    Related(Vec<PodcastResult>),
}

pub fn select_results(query: &str, results: Vec<PodcastResult>) -> MatchOutcome {
    if results.is_empty() {
        return MatchOutcome::Empty;
    }

    match results.iter().position(|r| r.is_exact_match(query)) {
        Some(index) => {
            let mut results = results;
            MatchOutcome::Exact(results.swap_remove(index))
        }
        None => MatchOutcome::Related(results),
    }
}

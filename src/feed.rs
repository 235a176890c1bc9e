//! RSS Feed Links
//!
//! Podwise publishes a feed for every podcast it indexes. The feed URL is
//! derived from the podcast's `seq` and is never fetched by this crate.

/// Base of every Podwise podcast feed URL
pub const FEED_BASE_URL: &str = "https://podwise.ai/feed/podcasts";

/// Build the RSS feed URL for a podcast
///
/// `seq` is taken as-is; its shape is not validated.
pub fn rss_link(seq: &str) -> String {
    format!("{}/{}/rss.xml", FEED_BASE_URL, seq)
}

//! Link lookup collaborators
//!
//! The search core discovers edges lazily by asking a `LinkLookup` for the
//! outward neighbors of one article at a time. Two implementations:
//! - `HttpLinkLookup`: fetches live pages over HTTP (production)
//! - `StaticLinkLookup`: serves a preconfigured in-memory graph (testing)

mod article;
mod extract;
mod http;
mod mock;

pub use article::{
    contains_excluded_prefix, existence_url_for_title, existence_url_with_base, is_wiki_article,
    key_from_title, key_from_title_with_base, title_from_key, ARTICLE_BASE_URL, EXISTENCE_BASE_URL,
};
pub use extract::extract_hrefs;
pub use http::HttpLinkLookup;
pub use mock::StaticLinkLookup;

use async_trait::async_trait;

/// Errors from a single lookup.
///
/// The search never propagates these: a failed lookup is a dead end.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} for {key}")]
    Status { key: String, status: u16 },
    #[error("lookup timed out: {0}")]
    Timeout(String),
    #[error("lookup failed: {0}")]
    Failed(String),
}

/// Client trait for discovering article links.
///
/// Abstracts over transport so the search core doesn't depend on how
/// pages are reached.
#[async_trait]
pub trait LinkLookup: Send + Sync {
    /// Fetch the keys of every article linked from `key`.
    ///
    /// Only keys that are valid graph nodes may be returned; filtering out
    /// non-article links is the implementation's job.
    async fn fetch_neighbors(&self, key: &str) -> Result<Vec<String>, LookupError>;

    /// Check whether an article with this title exists.
    async fn exists(&self, title: &str) -> Result<bool, LookupError>;

    /// Build the canonical key for an article title.
    fn key_for_title(&self, title: &str) -> String {
        key_from_title(title)
    }
}

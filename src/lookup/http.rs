//! Live Wikipedia lookups over HTTP

use super::article::{existence_url_with_base, is_wiki_article, key_from_title_with_base};
use super::extract::extract_hrefs;
use super::{LinkLookup, LookupError};
use crate::config::RaceConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Fetches article pages and extracts their article links.
///
/// Every link is returned as an absolute key on the configured article
/// base, so keys produced here match `key_for_title`.
#[derive(Debug, Clone)]
pub struct HttpLinkLookup {
    client: Client,
    article_base_url: String,
    existence_base_url: String,
}

impl HttpLinkLookup {
    /// Build a lookup from configuration.
    ///
    /// The request timeout mirrors `lookup_timeout_secs` so that a hung
    /// request fails inside the client as well as at the driver.
    pub fn new(config: &RaceConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.lookup_timeout())
            .build()?;
        Ok(Self {
            client,
            article_base_url: config.article_base_url.trim_end_matches('/').to_string(),
            existence_base_url: config.existence_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Turn an extracted href into a key, if it names an article
    fn key_for_href(&self, href: &str) -> Option<String> {
        is_wiki_article(href).then(|| format!("{}{}", self.article_base_url, href))
    }
}

#[async_trait]
impl LinkLookup for HttpLinkLookup {
    async fn fetch_neighbors(&self, key: &str) -> Result<Vec<String>, LookupError> {
        let resp = self.client.get(key).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout(key.to_string())
            } else {
                LookupError::Http(e)
            }
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                key: key.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let links: Vec<String> = extract_hrefs(&body)
            .iter()
            .filter_map(|href| self.key_for_href(href))
            .collect();

        debug!(key, links = links.len(), "fetched page");
        Ok(links)
    }

    async fn exists(&self, title: &str) -> Result<bool, LookupError> {
        let url = existence_url_with_base(&self.existence_base_url, title);
        let resp = self.client.get(&url).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(LookupError::Status {
                key: url,
                status: status.as_u16(),
            }),
        }
    }

    fn key_for_title(&self, title: &str) -> String {
        key_from_title_with_base(&self.article_base_url, title)
    }
}

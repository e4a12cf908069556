//! In-memory lookup for tests and demos

use super::article::{key_from_title, title_from_key};
use super::{LinkLookup, LookupError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Static link graph — returns preconfigured neighbors.
///
/// Pages are registered by title and stored under their canonical key.
/// A page that was never registered has no outgoing links but still
/// exists if something links to it.
#[derive(Debug, Default)]
pub struct StaticLinkLookup {
    links: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    slow: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl StaticLinkLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the outgoing links of one page, by title.
    pub fn with_links(mut self, title: &str, targets: &[&str]) -> Self {
        let entry = self.links.entry(key_from_title(title)).or_default();
        entry.extend(targets.iter().map(|t| key_from_title(t)));
        for target in targets {
            self.links.entry(key_from_title(target)).or_default();
        }
        self
    }

    /// Make lookups for this page fail
    pub fn with_failure(mut self, title: &str) -> Self {
        self.failing.insert(key_from_title(title));
        self
    }

    /// Delay lookups for this page
    pub fn with_delay(mut self, title: &str, delay: Duration) -> Self {
        self.slow.insert(key_from_title(title), delay);
        self
    }

    /// Number of `fetch_neighbors` calls served so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkLookup for StaticLinkLookup {
    async fn fetch_neighbors(&self, key: &str) -> Result<Vec<String>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.slow.get(key) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(key) {
            return Err(LookupError::Failed(format!(
                "no page for {}",
                title_from_key(key)
            )));
        }
        Ok(self.links.get(key).cloned().unwrap_or_default())
    }

    async fn exists(&self, title: &str) -> Result<bool, LookupError> {
        Ok(self.links.contains_key(&key_from_title(title)))
    }
}

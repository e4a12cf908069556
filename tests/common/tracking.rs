//! Lookup wrapper that tracks concurrency

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use wikirace::{LinkLookup, LookupError};

/// Delays every lookup and records the peak number in flight.
pub struct TrackingLookup {
    inner: Arc<dyn LinkLookup>,
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl TrackingLookup {
    pub fn new(inner: Arc<dyn LinkLookup>, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkLookup for TrackingLookup {
    async fn fetch_neighbors(&self, key: &str) -> Result<Vec<String>, LookupError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        let result = self.inner.fetch_neighbors(key).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn exists(&self, title: &str) -> Result<bool, LookupError> {
        self.inner.exists(title).await
    }
}

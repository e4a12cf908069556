//! Transport-independent API layer.
//!
//! `RaceApi` is the single entry point for consumer-facing operations.
//! Transports (CLI, MCP) call `RaceApi::race` and never reach into the
//! search directly. Every outcome, including invalid queries and races
//! with no path, is reported as a `RaceResponse`.

use crate::config::RaceConfig;
use crate::lookup::LinkLookup;
use crate::search::BidirectionalSearch;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// A race request as received from a transport
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceQuery {
    pub start: Option<String>,
    pub destination: Option<String>,
}

impl RaceQuery {
    pub fn new(start: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            destination: Some(destination.into()),
        }
    }
}

/// The structured result of a race.
///
/// `start` and `destination` echo the query titles as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResponse {
    pub completed: bool,
    pub start: String,
    pub destination: String,
    pub path: String,
    /// Seconds with six decimals
    pub elapsed_time_sec: String,
    /// Empty on success
    pub message: String,
}

impl RaceResponse {
    /// A response for a query that never started a search
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            completed: false,
            start: String::new(),
            destination: String::new(),
            path: String::new(),
            elapsed_time_sec: String::new(),
            message: message.into(),
        }
    }
}

/// Reasons a query is refused before searching
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or both parameters absent or empty; carries the full message
    #[error("{0}")]
    MissingParams(String),

    #[error("The article {0} does not exist.")]
    ArticleNotFound(String),
}

/// Check that both parameters are present and non-empty.
///
/// Whitespace-only titles count as missing. Titles are returned as given.
pub fn validate_query(query: &RaceQuery) -> Result<(String, String), ValidationError> {
    fn present(param: &Option<String>) -> Option<String> {
        param
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    }

    let start = present(&query.start);
    let destination = present(&query.destination);

    let mut message = String::new();
    if start.is_none() {
        message.push_str("Url param 'start' is missing. ");
    }
    if destination.is_none() {
        message.push_str("Url param 'destination' is missing. ");
    }

    match (start, destination) {
        (Some(start), Some(destination)) => Ok((start, destination)),
        _ => Err(ValidationError::MissingParams(message)),
    }
}

/// Format elapsed seconds the way responses carry them
fn format_elapsed(start: Instant) -> String {
    format!("{:.6}", start.elapsed().as_secs_f64())
}

/// Single entry point for racing between articles
#[derive(Clone)]
pub struct RaceApi {
    lookup: Arc<dyn LinkLookup>,
    search: BidirectionalSearch,
}

impl RaceApi {
    pub fn new(lookup: Arc<dyn LinkLookup>, config: &RaceConfig) -> Self {
        let search = BidirectionalSearch::with_config(lookup.clone(), config);
        Self { lookup, search }
    }

    /// Use a preconfigured search (its lookup is used for existence checks)
    pub fn with_search(search: BidirectionalSearch) -> Self {
        Self {
            lookup: search.lookup().clone(),
            search,
        }
    }

    /// Canonical lookup key for a title
    pub fn key_for_title(&self, title: &str) -> String {
        self.lookup.key_for_title(title)
    }

    /// Fail unless the article exists; lookup errors count as missing.
    async fn ensure_exists(&self, title: &str) -> Result<(), ValidationError> {
        match self.lookup.exists(title).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ValidationError::ArticleNotFound(title.to_string())),
            Err(e) => {
                warn!(title, error = %e, "existence check failed");
                Err(ValidationError::ArticleNotFound(title.to_string()))
            }
        }
    }

    /// Validate a query and race between its two articles.
    pub async fn race(&self, query: &RaceQuery) -> RaceResponse {
        let started = Instant::now();

        let (start, destination) = match validate_query(query) {
            Ok(titles) => titles,
            Err(e) => {
                warn!(error = %e, "rejected race query");
                return RaceResponse::rejected(e.to_string());
            }
        };

        for title in [start.trim(), destination.trim()] {
            if let Err(e) = self.ensure_exists(title).await {
                warn!(error = %e, "rejected race query");
                return RaceResponse::rejected(e.to_string());
            }
        }

        let origin_key = self.lookup.key_for_title(start.trim());
        let destination_key = self.lookup.key_for_title(destination.trim());
        let outcome = self.search.find_path(&origin_key, &destination_key).await;

        let elapsed = format_elapsed(started);
        info!(
            start = %start,
            destination = %destination,
            completed = outcome.found,
            elapsed_sec = %elapsed,
            "race finished"
        );

        RaceResponse {
            completed: outcome.found,
            path: outcome.path_string(),
            start,
            destination,
            elapsed_time_sec: elapsed,
            message: String::new(),
        }
    }
}

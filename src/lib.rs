//! wikirace: link paths between Wikipedia articles
//!
//! Finds a chain of article links from a start article to a destination
//! article without ever loading the link graph. Links are fetched lazily,
//! one page at a time, while two breadth-first searches grow towards each
//! other from both ends.
//!
//! # Core Concepts
//!
//! - **Frontier**: nodes queued for expansion on one side in the current round
//! - **Round**: every queued node on both sides is expanded exactly once
//! - **Meeting**: a key reached from one side that the other side already holds
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wikirace::{key_from_title, BidirectionalSearch, StaticLinkLookup};
//!
//! # tokio_test::block_on(async {
//! let lookup = StaticLinkLookup::new()
//!     .with_links("Start", &["Middle"])
//!     .with_links("Middle", &["End"]);
//! let search = BidirectionalSearch::new(Arc::new(lookup));
//!
//! let outcome = search.find_path(&key_from_title("Start"), &key_from_title("End")).await;
//! assert!(outcome.found);
//! assert_eq!(outcome.hops(), 2);
//! # });
//! ```

pub mod api;
pub mod config;
mod graph;
pub mod lookup;
pub mod mcp;
pub mod search;

pub use api::{validate_query, RaceApi, RaceQuery, RaceResponse, ValidationError};
pub use config::{ConfigError, RaceConfig};
pub use graph::{Candidate, Node, NodeIndex, Registration, Side, VisitedRegistry};
pub use lookup::{
    is_wiki_article, key_from_title, HttpLinkLookup, LinkLookup, LookupError, StaticLinkLookup,
};
pub use search::{
    select_shortest, BidirectionalSearch, Path, SearchOutcome, SearchStats, NO_PATH_FOUND,
    PATH_DELIMITER,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

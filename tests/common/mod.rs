//! Common test utilities for wikirace integration tests
//!
//! Small link graphs built on `StaticLinkLookup`, plus a lookup wrapper
//! that records how many requests were in flight at once.

#![allow(dead_code)]

pub mod graphs;
pub mod tracking;

pub use graphs::{chain, disconnected, k, uneven_meetings};
pub use tracking::TrackingLookup;

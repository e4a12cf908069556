//! Round-driver behavior against small in-memory link graphs

mod common;

use common::{chain, disconnected, k, uneven_meetings, TrackingLookup};
use std::sync::Arc;
use std::time::Duration;
use wikirace::{BidirectionalSearch, StaticLinkLookup, NO_PATH_FOUND, PATH_DELIMITER};

fn search(lookup: StaticLinkLookup) -> BidirectionalSearch {
    BidirectionalSearch::new(Arc::new(lookup))
}

fn joined(titles: &[&str]) -> String {
    titles.iter().map(|t| k(t)).collect::<Vec<_>>().join(PATH_DELIMITER)
}

#[tokio::test]
async fn disconnected_graph_reports_no_path() {
    let outcome = search(disconnected()).find_path(&k("A"), &k("D")).await;

    assert!(!outcome.found);
    assert!(outcome.path.is_none());
    assert_eq!(outcome.path_string(), NO_PATH_FOUND);
    assert_eq!(outcome.stats.registered, 4);
}

#[tokio::test]
async fn same_round_meeting_lists_origin_shared_destination() {
    let lookup = StaticLinkLookup::new()
        .with_links("Origin", &["Shared"])
        .with_links("Destination", &["Shared"]);
    let outcome = search(lookup).find_path(&k("Origin"), &k("Destination")).await;

    assert!(outcome.found);
    let rendered = outcome.path_string();
    assert_eq!(rendered, joined(&["Origin", "Shared", "Destination"]));
    assert!(!rendered.starts_with(PATH_DELIMITER.trim()));
    assert!(!rendered.ends_with(PATH_DELIMITER.trim()));
}

#[tokio::test]
async fn shortest_meeting_of_the_round_wins() {
    let outcome = search(uneven_meetings()).find_path(&k("A"), &k("D")).await;

    assert!(outcome.found);
    assert_eq!(outcome.stats.rounds, 4);
    assert_eq!(outcome.stats.meetings, 2);
    assert_eq!(outcome.hops(), 3);
    assert_eq!(outcome.path_string(), joined(&["A", "B1", "B2", "D"]));
}

#[tokio::test]
async fn one_sided_chain_is_followed_to_the_end() {
    let titles = ["A", "B", "C", "D", "E", "F", "G"];
    let outcome = search(chain(&titles)).find_path(&k("A"), &k("G")).await;

    assert!(outcome.found);
    assert_eq!(outcome.hops(), 6);
    assert_eq!(outcome.path_string(), joined(&titles));
}

#[tokio::test]
async fn failed_lookup_is_a_dead_end() {
    let lookup = StaticLinkLookup::new()
        .with_links("A", &["Broken", "Working"])
        .with_links("Broken", &["D"])
        .with_links("Working", &["Detour"])
        .with_links("Detour", &["D"])
        .with_failure("Broken");
    let outcome = search(lookup).find_path(&k("A"), &k("D")).await;

    assert!(outcome.found);
    assert_eq!(outcome.path_string(), joined(&["A", "Working", "Detour", "D"]));
    assert_eq!(outcome.stats.failed_lookups, 1);
}

#[tokio::test]
async fn timed_out_lookup_is_a_dead_end() {
    let lookup = StaticLinkLookup::new()
        .with_links("A", &["Slow", "Fast"])
        .with_links("Slow", &["D"])
        .with_links("Fast", &["Detour"])
        .with_links("Detour", &["D"])
        .with_delay("Slow", Duration::from_millis(500));
    let outcome = search(lookup)
        .with_lookup_timeout(Duration::from_millis(50))
        .find_path(&k("A"), &k("D"))
        .await;

    assert!(outcome.found);
    assert_eq!(outcome.path_string(), joined(&["A", "Fast", "Detour", "D"]));
    assert_eq!(outcome.stats.failed_lookups, 1);
}

#[tokio::test]
async fn round_waits_for_slow_lookup_within_timeout() {
    let lookup = StaticLinkLookup::new()
        .with_links("A", &["Slow", "Fast", "Quick"])
        .with_links("Slow", &["D"])
        .with_delay("Slow", Duration::from_millis(150));
    let outcome = search(lookup)
        .with_lookup_timeout(Duration::from_secs(5))
        .find_path(&k("A"), &k("D"))
        .await;

    assert!(outcome.found);
    assert_eq!(outcome.path_string(), joined(&["A", "Slow", "D"]));
    assert_eq!(outcome.stats.rounds, 3);
    assert_eq!(outcome.stats.lookups, 5);
    assert_eq!(outcome.stats.failed_lookups, 0);
}

#[tokio::test]
async fn concurrent_lookups_are_capped() {
    let children: Vec<String> = (0..20).map(|i| format!("Leaf {i}")).collect();
    let child_refs: Vec<&str> = children.iter().map(String::as_str).collect();
    let inner = StaticLinkLookup::new().with_links("Hub", &child_refs);

    let tracking = Arc::new(TrackingLookup::new(Arc::new(inner), Duration::from_millis(20)));
    let search = BidirectionalSearch::new(tracking.clone()).with_concurrency(3);

    let outcome = search.find_path(&k("Hub"), &k("Elsewhere")).await;

    assert!(!outcome.found);
    assert_eq!(outcome.stats.lookups, 22);
    assert!(tracking.peak() >= 1);
    assert!(tracking.peak() <= 3, "peak was {}", tracking.peak());
}

#[tokio::test]
async fn every_search_starts_from_an_empty_registry() {
    let search = search(chain(&["A", "B", "C"]));

    let first = search.find_path(&k("A"), &k("C")).await;
    let second = search.find_path(&k("A"), &k("C")).await;

    assert_eq!(first.path_string(), second.path_string());
    assert_eq!(first.stats, second.stats);
}

#[tokio::test]
async fn reversed_race_reverses_the_path() {
    let lookup = StaticLinkLookup::new()
        .with_links("A", &["M"])
        .with_links("D", &["M"]);
    let search = search(lookup);

    let forward = search.find_path(&k("A"), &k("D")).await;
    let backward = search.find_path(&k("D"), &k("A")).await;

    let mut keys = forward.path.unwrap().keys().to_vec();
    keys.reverse();
    assert_eq!(keys, backward.path.unwrap().keys());
}

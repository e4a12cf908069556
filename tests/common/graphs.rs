//! Link graph fixtures

use wikirace::{key_from_title, StaticLinkLookup};

/// Canonical key for a title
pub fn k(title: &str) -> String {
    key_from_title(title)
}

/// A -> B -> ... along `titles`
pub fn chain(titles: &[&str]) -> StaticLinkLookup {
    titles
        .windows(2)
        .fold(StaticLinkLookup::new(), |lookup, pair| {
            lookup.with_links(pair[0], &[pair[1]])
        })
}

/// Two islands with internal cycles: A <-> B and D <-> E
pub fn disconnected() -> StaticLinkLookup {
    StaticLinkLookup::new()
        .with_links("A", &["B"])
        .with_links("B", &["A"])
        .with_links("D", &["E"])
        .with_links("E", &["D"])
}

/// A graph where round 4 holds two meetings, a 5-hop one found first and a
/// 3-hop one found second.
///
/// Origin side:      A -> B1 -> B2 -> {X2, D}
/// Destination side: D -> X1 -> X2
pub fn uneven_meetings() -> StaticLinkLookup {
    StaticLinkLookup::new()
        .with_links("A", &["B1"])
        .with_links("B1", &["B2"])
        .with_links("B2", &["X2", "D"])
        .with_links("D", &["X1"])
        .with_links("X1", &["X2"])
}

//! Path reconstruction from a meeting between the two search trees

use crate::graph::{Node, Side, VisitedRegistry};
use serde::{Serialize, Serializer};

/// Separator between keys in a rendered path
pub const PATH_DELIMITER: &str = " -> ";

/// Ordered article keys from origin to destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    keys: Vec<String>,
}

impl Path {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of links followed (delimiters in the rendered form)
    pub fn hops(&self) -> usize {
        self.keys.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    /// The same keys in the opposite direction
    pub fn reversed(&self) -> Self {
        let mut keys = self.keys.clone();
        keys.reverse();
        Self { keys }
    }

    /// Keys joined with `PATH_DELIMITER`
    pub fn render(&self) -> String {
        self.keys.join(PATH_DELIMITER)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

/// Join the chains of two nodes that share a key.
///
/// Yields `a`'s root down to `a`, then `b`'s predecessor up to `b`'s root.
/// The shared key appears once. `a` need not be registered, but both
/// predecessors must be.
pub fn join_chains(registry: &VisitedRegistry, a: &Node, b: &Node) -> Vec<String> {
    let mut keys = registry.chain_to_root(a.predecessor);
    keys.reverse();
    keys.push(a.key.clone());
    keys.extend(registry.chain_to_root(b.predecessor));
    keys
}

/// Build the origin-to-destination path for a meeting.
///
/// `candidate` is the node just dequeued; `registered` is the node already
/// holding the same key for the opposite side. Whichever side discovered
/// the key last, the path starts at the origin root.
pub fn reconstruct_path(registry: &VisitedRegistry, candidate: &Node, registered: &Node) -> Path {
    let path = Path::new(join_chains(registry, candidate, registered));
    match candidate.side {
        Side::Origin => path,
        Side::Destination => path.reversed(),
    }
}

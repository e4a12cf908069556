//! Node representation for one race

use serde::{Deserialize, Serialize};

/// Which of the two simultaneous searches discovered a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Search rooted at the start article
    Origin,
    /// Search rooted at the destination article
    Destination,
}

impl Side {
    /// The side searching towards this one
    pub fn opposite(self) -> Self {
        match self {
            Side::Origin => Side::Destination,
            Side::Destination => Side::Origin,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Origin => write!(f, "origin"),
            Side::Destination => write!(f, "destination"),
        }
    }
}

/// Position of a registered node in the registry arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw arena offset
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A registered graph location
///
/// `predecessor` points into the same registry arena and is `None` only
/// for the two search roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Canonical article key
    pub key: String,
    /// Side that discovered this node
    pub side: Side,
    /// Node that discovered this one
    pub predecessor: Option<NodeIndex>,
}

/// A queued location that has not been registered yet
///
/// Its predecessor, when present, is always already registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub key: String,
    pub side: Side,
    pub predecessor: Option<NodeIndex>,
}

impl Candidate {
    /// A search root
    pub fn root(key: impl Into<String>, side: Side) -> Self {
        Self {
            key: key.into(),
            side,
            predecessor: None,
        }
    }

    /// A neighbor discovered while expanding `predecessor`
    pub fn child(key: impl Into<String>, side: Side, predecessor: NodeIndex) -> Self {
        Self {
            key: key.into(),
            side,
            predecessor: Some(predecessor),
        }
    }

    pub fn is_root(&self) -> bool {
        self.predecessor.is_none()
    }
}

impl From<Candidate> for Node {
    fn from(c: Candidate) -> Self {
        Self {
            key: c.key,
            side: c.side,
            predecessor: c.predecessor,
        }
    }
}

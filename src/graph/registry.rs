//! VisitedRegistry: the per-race record of every registered node
//!
//! Nodes live in an arena and refer to their predecessor by index, so the
//! two search trees need no shared ownership.
//!
//! Single-writer invariant: the registry is owned by the round driver and
//! only mutated between rounds, after every lookup of the previous round has
//! reported. Lookup tasks receive an owned key and a `NodeIndex`, never the
//! registry. `register` takes `&mut self` and the type is deliberately not
//! wrapped in any lock, so a concurrent writer cannot be added without
//! changing this module.

use super::node::{Candidate, Node, NodeIndex, Side};
use serde::Serialize;
use std::collections::HashMap;

/// Outcome of offering a candidate to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The key was new and is now registered at this index
    Registered(NodeIndex),
    /// The key was already registered by the same side
    SameSide(NodeIndex),
    /// The key was already registered by the opposite side
    OppositeSide(NodeIndex),
}

/// Key to node mapping shared by both searches for one race
#[derive(Debug, Default, Serialize)]
pub struct VisitedRegistry {
    nodes: Vec<Node>,
    #[serde(skip)]
    by_key: HashMap<String, NodeIndex>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate unless its key is already known.
    ///
    /// The first write for a key wins; a later candidate for the same key is
    /// reported as `SameSide` or `OppositeSide` and left unregistered.
    pub fn register(&mut self, candidate: Candidate) -> Registration {
        if let Some(&existing) = self.by_key.get(&candidate.key) {
            let node = &self.nodes[existing.as_usize()];
            return if node.side == candidate.side {
                Registration::SameSide(existing)
            } else {
                Registration::OppositeSide(existing)
            };
        }

        let index = NodeIndex::new(self.nodes.len());
        self.by_key.insert(candidate.key.clone(), index);
        self.nodes.push(candidate.into());
        Registration::Registered(index)
    }

    /// Get a registered node by index
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.as_usize())
    }

    /// Keys from the root of `index`'s tree down to `index`
    pub fn chain_from_root(&self, index: NodeIndex) -> Vec<String> {
        let mut keys = self.chain_to_root(Some(index));
        keys.reverse();
        keys
    }

    /// Keys from `start` up to its root, `start` first
    pub fn chain_to_root(&self, start: Option<NodeIndex>) -> Vec<String> {
        let mut keys = Vec::new();
        let mut current = start;
        while let Some(idx) = current {
            match self.get(idx) {
                Some(node) => {
                    keys.push(node.key.clone());
                    current = node.predecessor;
                }
                None => break,
            }
        }
        keys
    }

    /// Number of registered nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes registered by one side
    pub fn count_side(&self, side: Side) -> usize {
        self.nodes.iter().filter(|n| n.side == side).count()
    }
}

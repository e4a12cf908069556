//! Frontier queues and the per-node expansion decision

use super::path::{reconstruct_path, Path};
use crate::graph::{Candidate, NodeIndex, Registration, Side, VisitedRegistry};
use std::collections::VecDeque;

/// Nodes queued for expansion on one side during one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    side: Side,
    queue: VecDeque<Candidate>,
}

impl Frontier {
    /// An empty frontier for `side`
    pub fn new(side: Side) -> Self {
        Self {
            side,
            queue: VecDeque::new(),
        }
    }

    /// A frontier holding only the search root
    pub fn with_root(key: impl Into<String>, side: Side) -> Self {
        let mut frontier = Self::new(side);
        frontier.push(Candidate::root(key, side));
        frontier
    }

    pub fn push(&mut self, candidate: Candidate) {
        debug_assert_eq!(candidate.side, self.side);
        self.queue.push_back(candidate);
    }

    pub fn pop(&mut self) -> Option<Candidate> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.queue.iter()
    }
}

impl Extend<Candidate> for Frontier {
    fn extend<I: IntoIterator<Item = Candidate>>(&mut self, iter: I) {
        for candidate in iter {
            self.push(candidate);
        }
    }
}

/// A lookup to run for a freshly registered node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTask {
    pub key: String,
    pub side: Side,
    /// Registry index of the node being expanded
    pub node: NodeIndex,
}

impl LookupTask {
    /// Wrap fetched neighbor keys as next-round candidates
    pub fn children(&self, keys: Vec<String>) -> Vec<Candidate> {
        keys.into_iter()
            .map(|key| Candidate::child(key, self.side, self.node))
            .collect()
    }
}

/// What one dequeued node turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// The key was already registered by the other side
    Meeting(Path),
    /// The key was already registered by this side
    Duplicate,
    /// The key was new; its links must be fetched
    Dispatch(LookupTask),
}

/// Decide whether a dequeued node is a meeting or a new expansion point.
///
/// Only a new key is registered; a meeting candidate stays out of the
/// registry.
pub fn process_node(registry: &mut VisitedRegistry, candidate: Candidate) -> Expansion {
    let key = candidate.key.clone();
    let side = candidate.side;

    match registry.register(candidate.clone()) {
        Registration::Registered(node) => Expansion::Dispatch(LookupTask { key, side, node }),
        Registration::SameSide(_) => Expansion::Duplicate,
        Registration::OppositeSide(existing) => match registry.get(existing) {
            Some(registered) => {
                Expansion::Meeting(reconstruct_path(registry, &candidate.into(), registered))
            }
            None => Expansion::Duplicate,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_key_is_registered_and_dispatched() {
        let mut registry = VisitedRegistry::new();
        let expansion = process_node(&mut registry, Candidate::root("a", Side::Origin));

        match expansion {
            Expansion::Dispatch(task) => {
                assert_eq!(task.key, "a");
                assert_eq!(task.side, Side::Origin);
                assert_eq!(registry.get(task.node).unwrap().key, "a");
            }
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn same_side_repeat_is_ignored() {
        let mut registry = VisitedRegistry::new();
        process_node(&mut registry, Candidate::root("a", Side::Destination));
        let again = process_node(&mut registry, Candidate::root("a", Side::Destination));

        assert_eq!(again, Expansion::Duplicate);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn opposite_side_meets_without_registering() {
        let mut registry = VisitedRegistry::new();
        let Expansion::Dispatch(origin) =
            process_node(&mut registry, Candidate::root("o", Side::Origin))
        else {
            panic!("origin root not dispatched");
        };
        let Expansion::Dispatch(dest) =
            process_node(&mut registry, Candidate::root("d", Side::Destination))
        else {
            panic!("destination root not dispatched");
        };
        process_node(&mut registry, Candidate::child("m", Side::Origin, origin.node));

        let expansion = process_node(&mut registry, Candidate::child("m", Side::Destination, dest.node));
        match expansion {
            Expansion::Meeting(path) => assert_eq!(path.render(), "o -> m -> d"),
            other => panic!("expected meeting, got {other:?}"),
        }
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn task_children_point_at_expanded_node() {
        let task = LookupTask {
            key: "a".into(),
            side: Side::Origin,
            node: NodeIndex::new(4),
        };
        let children = task.children(vec!["b".into(), "c".into()]);
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.predecessor == Some(NodeIndex::new(4))));
        assert!(children.iter().all(|c| c.side == Side::Origin));
    }

    #[test]
    fn frontier_is_fifo() {
        let mut frontier = Frontier::with_root("r", Side::Origin);
        frontier.extend(vec![
            Candidate::child("x", Side::Origin, NodeIndex::new(0)),
            Candidate::child("y", Side::Origin, NodeIndex::new(0)),
        ]);
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).map(|c| c.key).collect();
        assert_eq!(order, vec!["r", "x", "y"]);
    }
}

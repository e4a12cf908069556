//! Core graph data structures for a single race

mod node;
mod registry;

pub use node::{Candidate, Node, NodeIndex, Side};
pub use registry::{Registration, VisitedRegistry};

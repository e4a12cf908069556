//! Bidirectional search between two articles
//!
//! Both endpoints are expanded in synchronized rounds; the search stops at
//! the first round in which the two frontiers touch.

mod driver;
mod frontier;
mod path;
mod select;
mod types;

pub use driver::{BidirectionalSearch, RoundState, RoundStep};
pub use frontier::{process_node, Expansion, Frontier, LookupTask};
pub use path::{join_chains, reconstruct_path, Path, PATH_DELIMITER};
pub use select::select_shortest;
pub use types::{SearchOutcome, SearchStats, NO_PATH_FOUND};

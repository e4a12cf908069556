//! Search result structures

use super::path::Path;
use serde::Serialize;

/// Rendered in place of a path when the frontiers never meet
pub const NO_PATH_FOUND: &str = "No Path Found.";

/// Counters collected while racing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Rounds started
    pub rounds: usize,
    /// Nodes written to the visited registry
    pub registered: usize,
    /// Lookups dispatched
    pub lookups: usize,
    /// Lookups that failed, timed out or panicked
    pub failed_lookups: usize,
    /// Meetings seen in the final round
    pub meetings: usize,
}

/// Result of one bidirectional search
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Whether the two frontiers met
    pub found: bool,
    /// The selected path, when found
    pub path: Option<Path>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn not_found(stats: SearchStats) -> Self {
        Self {
            found: false,
            path: None,
            stats,
        }
    }

    pub fn found(path: Path, stats: SearchStats) -> Self {
        Self {
            found: true,
            path: Some(path),
            stats,
        }
    }

    /// The rendered path, or `NO_PATH_FOUND`
    pub fn path_string(&self) -> String {
        self.path
            .as_ref()
            .map(Path::render)
            .unwrap_or_else(|| NO_PATH_FOUND.to_string())
    }

    /// Path length in hops (0 when not found)
    pub fn hops(&self) -> usize {
        self.path.as_ref().map(Path::hops).unwrap_or(0)
    }
}

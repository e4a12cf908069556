//! Choosing one path among the meetings of a single round

use super::path::Path;

/// Pick the path with the fewest hops.
///
/// Ties keep the earliest path in `paths`. Returns `None` only for an
/// empty input.
pub fn select_shortest(paths: Vec<Path>) -> Option<Path> {
    let mut best: Option<Path> = None;
    for path in paths {
        match &best {
            Some(current) if path.hops() >= current.hops() => {}
            _ => best = Some(path),
        }
    }
    best
}

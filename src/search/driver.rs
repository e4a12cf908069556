//! Round driver for the bidirectional search
//!
//! Each round drains both frontiers through `process_node`, then fans the
//! resulting lookups out over a bounded pool and waits for every one of
//! them before building the next frontiers. The registry is only touched
//! by the driver, between those barriers.

use super::frontier::{process_node, Expansion, Frontier, LookupTask};
use super::path::Path;
use super::select::select_shortest;
use super::types::{SearchOutcome, SearchStats};
use crate::config::RaceConfig;
use crate::graph::{Candidate, Side, VisitedRegistry};
use crate::lookup::LinkLookup;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Frontiers for the round about to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// 1-based number of the round these frontiers belong to
    pub round: usize,
    pub origin: Frontier,
    pub destination: Frontier,
}

impl RoundState {
    /// The first round: each frontier holds only its root
    pub fn initial(origin_key: &str, destination_key: &str) -> Self {
        Self {
            round: 1,
            origin: Frontier::with_root(origin_key, Side::Origin),
            destination: Frontier::with_root(destination_key, Side::Destination),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.origin.is_empty() && self.destination.is_empty()
    }
}

/// What a finished round leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStep {
    /// The frontiers met; every path found this round
    Met(Vec<Path>),
    /// No meeting yet; frontiers for the following round
    Next(RoundState),
}

/// Lookups collected while draining one round
struct Drained {
    meetings: Vec<Path>,
    tasks: Vec<LookupTask>,
}

/// Bidirectional breadth-first search over a lazily fetched link graph.
///
/// Holds no per-query state; every `find_path` starts with an empty
/// registry.
#[derive(Clone)]
pub struct BidirectionalSearch {
    lookup: Arc<dyn LinkLookup>,
    max_concurrent_lookups: usize,
    lookup_timeout: Duration,
    max_rounds: Option<usize>,
}

impl BidirectionalSearch {
    /// Create a search with default limits
    pub fn new(lookup: Arc<dyn LinkLookup>) -> Self {
        Self::with_config(lookup, &RaceConfig::default())
    }

    /// Create a search with limits taken from configuration
    pub fn with_config(lookup: Arc<dyn LinkLookup>, config: &RaceConfig) -> Self {
        Self {
            lookup,
            max_concurrent_lookups: config.max_concurrent_lookups.max(1),
            lookup_timeout: config.lookup_timeout(),
            max_rounds: config.max_rounds,
        }
    }

    /// Set the number of lookups allowed in flight at once
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrent_lookups = limit.max(1);
        self
    }

    /// Set the per-lookup timeout
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Give up after this many rounds
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn lookup(&self) -> &Arc<dyn LinkLookup> {
        &self.lookup
    }

    /// Search for a path between two keys.
    ///
    /// Stops at the first round in which the frontiers meet and reports the
    /// shortest path of that round, or reports not found once both
    /// frontiers are empty.
    pub async fn find_path(&self, origin_key: &str, destination_key: &str) -> SearchOutcome {
        let mut registry = VisitedRegistry::new();
        let mut stats = SearchStats::default();
        let mut state = RoundState::initial(origin_key, destination_key);

        info!(origin = origin_key, destination = destination_key, "starting race");

        loop {
            stats.rounds = state.round;
            let round = state.round;

            match self.run_round(&mut registry, state, &mut stats).await {
                RoundStep::Met(paths) => {
                    stats.meetings = paths.len();
                    stats.registered = registry.len();
                    return match select_shortest(paths) {
                        Some(path) => {
                            info!(round, hops = path.hops(), registered = stats.registered, "frontiers met");
                            SearchOutcome::found(path, stats)
                        }
                        None => SearchOutcome::not_found(stats),
                    };
                }
                RoundStep::Next(next) => {
                    stats.registered = registry.len();
                    if next.is_exhausted() {
                        info!(round, registered = stats.registered, "frontiers exhausted");
                        return SearchOutcome::not_found(stats);
                    }
                    if self.max_rounds.is_some_and(|max| round >= max) {
                        warn!(round, "round limit reached");
                        return SearchOutcome::not_found(stats);
                    }
                    state = next;
                }
            }
        }
    }

    /// Run one round and return what follows it.
    ///
    /// The registry is mutated only while draining, before any lookup of
    /// this round is spawned, and the round does not return until every
    /// spawned lookup has reported.
    pub async fn run_round(
        &self,
        registry: &mut VisitedRegistry,
        state: RoundState,
        stats: &mut SearchStats,
    ) -> RoundStep {
        let round = state.round;
        debug!(
            round,
            origin = state.origin.len(),
            destination = state.destination.len(),
            "draining frontiers"
        );

        let drained = drain(registry, state.origin, state.destination);
        if !drained.meetings.is_empty() {
            return RoundStep::Met(drained.meetings);
        }

        stats.lookups += drained.tasks.len();
        let children = self.fan_out(drained.tasks, stats).await;

        let mut next = RoundState {
            round: round + 1,
            origin: Frontier::new(Side::Origin),
            destination: Frontier::new(Side::Destination),
        };
        for candidate in children {
            match candidate.side {
                Side::Origin => next.origin.push(candidate),
                Side::Destination => next.destination.push(candidate),
            }
        }
        RoundStep::Next(next)
    }

    /// Run every lookup of a round and return all children in dispatch order.
    async fn fan_out(&self, tasks: Vec<LookupTask>, stats: &mut SearchStats) -> Vec<Candidate> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_lookups));
        let mut join_set: JoinSet<(usize, Option<Vec<Candidate>>)> = JoinSet::new();
        let dispatched = tasks.len();

        for (seq, task) in tasks.into_iter().enumerate() {
            let sem = semaphore.clone();
            let lookup = self.lookup.clone();
            let timeout = self.lookup_timeout;

            join_set.spawn(async move {
                // The semaphore is never closed, so a permit always arrives
                let _permit = sem.acquire_owned().await.ok();
                let children = match tokio::time::timeout(timeout, lookup.fetch_neighbors(&task.key)).await {
                    Ok(Ok(keys)) => Some(task.children(keys)),
                    Ok(Err(e)) => {
                        debug!(key = %task.key, error = %e, "lookup failed, treating as dead end");
                        None
                    }
                    Err(_) => {
                        debug!(key = %task.key, "lookup timed out, treating as dead end");
                        None
                    }
                };
                (seq, children)
            });
        }

        let mut results: Vec<Vec<Candidate>> = vec![Vec::new(); dispatched];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((seq, Some(children))) => results[seq] = children,
                Ok((_, None)) => stats.failed_lookups += 1,
                Err(e) => {
                    warn!(error = %e, "lookup task aborted");
                    stats.failed_lookups += 1;
                }
            }
        }

        results.into_iter().flatten().collect()
    }
}

impl std::fmt::Debug for BidirectionalSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BidirectionalSearch")
            .field("max_concurrent_lookups", &self.max_concurrent_lookups)
            .field("lookup_timeout", &self.lookup_timeout)
            .field("max_rounds", &self.max_rounds)
            .finish_non_exhaustive()
    }
}

/// Feed both frontiers through `process_node`, alternating sides.
///
/// Keeps draining after a meeting so that every meeting of the round is
/// collected.
fn drain(registry: &mut VisitedRegistry, mut origin: Frontier, mut destination: Frontier) -> Drained {
    let mut drained = Drained {
        meetings: Vec::new(),
        tasks: Vec::new(),
    };

    while !origin.is_empty() || !destination.is_empty() {
        for frontier in [&mut origin, &mut destination] {
            let Some(candidate) = frontier.pop() else {
                continue;
            };
            match process_node(registry, candidate) {
                Expansion::Meeting(path) => drained.meetings.push(path),
                Expansion::Duplicate => {}
                Expansion::Dispatch(task) => drained.tasks.push(task),
            }
        }
    }

    drained
}

use crate::statistics::Stats;

use super::Traversable;

/// Whether `destination` is reachable from `start` through zero or more edges.
///
/// A node always reaches itself, even without any edge. Returns `false` if
/// either end is absent. The walk stops as soon as the destination shows up.
///
/// # Panics
/// If a present key is an arena handle that does not belong to `graph`.
pub fn can_reach<G: Traversable>(
    graph: &G,
    start: Option<&G::Key>,
    destination: Option<&G::Key>,
) -> bool {
    can_reach_with_stats(graph, start, destination, &mut Stats::new())
}

/// [`can_reach`], merging the counters of its walk into `stats`.
///
/// Nothing is recorded when no walk is needed (absent end, or start equal
/// to destination).
pub fn can_reach_with_stats<G: Traversable>(
    graph: &G,
    start: Option<&G::Key>,
    destination: Option<&G::Key>,
    stats: &mut Stats,
) -> bool {
    let (Some(start), Some(destination)) = (start, destination) else {
        return false;
    };
    if start == destination {
        return true;
    }

    let mut walk = graph.depth_first(Some(start.clone()));
    let found = walk.any(|key| &key == destination);
    stats.merge(walk.stats());
    found
}

/// Every node reachable from `start` that lists itself as a direct neighbor.
///
/// Nodes come out in traversal order, each one once no matter how many times
/// it repeats itself in its neighbor list.
///
/// # Panics
/// If `start` is an arena handle that does not belong to `graph`.
pub fn self_loops<G: Traversable>(graph: &G, start: Option<G::Key>) -> Vec<G::Key> {
    self_loops_with_stats(graph, start, &mut Stats::new())
}

/// [`self_loops`], merging the counters of its walk into `stats`.
pub fn self_loops_with_stats<G: Traversable>(
    graph: &G,
    start: Option<G::Key>,
    stats: &mut Stats,
) -> Vec<G::Key> {
    let mut walk = graph.depth_first(start);
    let loops = walk
        .by_ref()
        .filter(|key| graph.neighbors(key).contains(key))
        .collect();
    stats.merge(walk.stats());
    loops
}

use crate::{sets::visited::VisitorSet, statistics::Stats};

use super::Traversable;

/// Pre-order depth-first walk over a [`Traversable`] graph.
///
/// Yields every node reachable from the start exactly once, in the order a
/// recursive walk would visit them: a node first, then each neighbor subtree
/// in neighbor-list order. The walk keeps an explicit stack instead of
/// recursing, so deep graphs cannot exhaust the call stack.
///
/// Neighbor keys the graph has no entry for are still yielded (they are
/// reached), they simply contribute no further edges.
pub struct DepthFirst<'g, G: Traversable> {
    graph: &'g G,
    stack: Vec<G::Key>,
    visited: G::Visited,
    stats: Stats,
}

impl<'g, G: Traversable> DepthFirst<'g, G> {
    pub fn new(graph: &'g G, start: Option<G::Key>) -> Self {
        let mut stats = Stats::new();
        stats.bump_traversals();
        DepthFirst {
            graph,
            stack: start.into_iter().collect(),
            visited: graph.visitor_set(),
            stats,
        }
    }

    /// Whether the walk has already yielded `key`.
    pub fn is_visited(&self, key: &G::Key) -> bool {
        self.visited.get(key)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

impl<G: Traversable> Iterator for DepthFirst<'_, G> {
    type Item = G::Key;

    fn next(&mut self) -> Option<G::Key> {
        let graph = self.graph;
        while let Some(key) = self.stack.pop() {
            // the same node may sit on the stack several times, only its first pop counts
            if !self.visited.set(key.clone()) {
                continue;
            }

            let neighbors = graph.neighbors(&key);
            self.stats.bump_nodes();
            self.stats.bump_edges(neighbors.len());

            // pushed in reverse so that the first neighbor is expanded first
            let visited = &self.visited;
            self.stack.extend(
                neighbors
                    .iter()
                    .rev()
                    .filter(|neighbor| !visited.get(neighbor))
                    .cloned(),
            );
            return Some(key);
        }
        None
    }
}

impl<G: Traversable> Drop for DepthFirst<'_, G> {
    fn drop(&mut self) {
        tracing::debug!(
            nodes_visited = self.stats.get_nodes_visited(),
            edges_examined = self.stats.get_edges_examined(),
            "depth-first walk finished"
        );
    }
}
